//! Podium - Season-sequenced TrueSkill rating engine for 2v2 tournaments
//!
//! This crate replays pairwise team outcomes (a winning pair beating a losing
//! pair) season by season through a Bayesian skill model, locks per-season
//! rating snapshots, and exposes exposure-ranked standings, predictive match
//! probabilities, and per-tier win/loss summaries. Loading match records and
//! rendering the results belong to external collaborators.

pub mod error;
pub mod ledger;
pub mod rating;
pub mod summary;
pub mod tournament;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TournamentError};
pub use types::*;

// Re-export key components
pub use ledger::{Player, PlayerLedger};
pub use rating::{TrueSkillModel, TrueSkillModelConfig};
pub use summary::{PlayerSummary, TeamSummary, TierCounts};
pub use tournament::TournamentEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
