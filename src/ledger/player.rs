//! Per-player rating state with locked season snapshots

use crate::types::{PlayerName, Rating, Season};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A player's rating state across seasons.
///
/// `season_ratings` is append-only once a season is locked: entries are
/// written exclusively by [`Player::lock_season_rating`] and never revised by
/// later seasons. A newly created player carries a baseline snapshot at
/// `debut_season - 1` so that pre-debut queries resolve to the baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerName,
    /// Current rating, not yet locked to any season
    pub rating: Rating,
    season_ratings: BTreeMap<Season, Rating>,
}

impl Player {
    /// Create a player seeded with `baseline` recorded at the season before
    /// their debut. A debut in season 1 seeds a snapshot at season 0.
    pub fn new(name: impl Into<PlayerName>, baseline: Rating, debut_season: Season) -> Self {
        let seeded_season = debut_season.saturating_sub(1);
        Self {
            name: name.into(),
            rating: baseline,
            season_ratings: BTreeMap::from([(seeded_season, baseline)]),
        }
    }

    /// Whether a snapshot exists for `season`
    pub fn participated_in_season(&self, season: Season) -> bool {
        self.season_ratings.contains_key(&season)
    }

    /// Locked rating for `season`, if the player had one by then
    pub fn season_rating(&self, season: Season) -> Option<Rating> {
        self.season_ratings.get(&season).copied()
    }

    /// Overwrite the current (unlocked) rating
    pub fn set_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    /// Freeze the current rating as the permanent record for `season`.
    /// Idempotent while the current rating is unchanged.
    pub fn lock_season_rating(&mut self, season: Season) {
        self.season_ratings.insert(season, self.rating);
    }

    /// Exposure at each requested season, `None` where no snapshot exists.
    /// Used by time-series reporting collaborators.
    pub fn seasons_exposure(&self, seasons: &[Season]) -> Vec<Option<f64>> {
        seasons
            .iter()
            .map(|season| self.season_rating(*season).map(|r| r.exposure()))
            .collect()
    }
}
