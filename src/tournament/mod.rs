//! Tournament orchestration: season-ordered replay and queries
//!
//! This module replays the full match history through the rating model once
//! at construction time, locking per-season snapshots into the player ledger,
//! and then answers ranking, probability, and summary queries read-only.

pub mod engine;

// Re-export commonly used types
pub use engine::TournamentEngine;
