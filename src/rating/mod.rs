//! Rating system integration using the TrueSkill algorithm
//!
//! This module provides the two-team Bayesian rating update and the
//! win-probability model, built on the skillratings crate.

pub mod trueskill;

// Re-export commonly used types
pub use trueskill::{TrueSkillModel, TrueSkillModelConfig};
