//! Player ledger: per-player rating state and season snapshots
//!
//! This module tracks each player's current rating, the locked snapshot of
//! their rating at the end of every completed season, and derives the
//! exposure-ordered rankings read by reporting collaborators.

pub mod player;
pub mod registry;

// Re-export commonly used types
pub use player::Player;
pub use registry::PlayerLedger;
