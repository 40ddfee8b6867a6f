//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate. Absence of routine data (a player who has not debuted
//! yet, a season with no snapshot) is expressed as `Option`, never as an error;
//! the variants below cover configuration mistakes and caller bugs only.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific tournament scenarios
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("Unknown player: {name}")]
    UnknownPlayer { name: String },

    #[error("Player {name} has no recorded rating for season {season}")]
    MissingSeasonRating { name: String, season: u32 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
