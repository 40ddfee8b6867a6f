//! Registry of all known players, keyed by name

use crate::ledger::player::Player;
use crate::types::{PlayerName, Rating, Season};
use std::collections::BTreeMap;

/// Registry/arena of every player seen so far.
///
/// Players are created lazily on first reference and live for the lifetime of
/// the ledger. Iteration order is name order, which doubles as the documented
/// tie-break for equal exposures in the rankings.
#[derive(Debug, Clone, Default)]
pub struct PlayerLedger {
    players: BTreeMap<PlayerName, Player>,
}

impl PlayerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a player, creating one on demand.
    ///
    /// Creation seeds the player with `baseline` recorded at `season - 1`;
    /// creation-on-lookup is a documented side effect, not hidden map
    /// semantics.
    pub fn get_or_create(
        &mut self,
        name: &str,
        season: Season,
        baseline: Rating,
    ) -> &mut Player {
        self.players
            .entry(name.to_string())
            .or_insert_with(|| Player::new(name, baseline, season))
    }

    /// Overwrite a player's current (unlocked) rating. No-op for unknown
    /// names; the engine always creates players before rating them.
    pub fn set_current_rating(&mut self, name: &str, rating: Rating) {
        if let Some(player) = self.players.get_mut(name) {
            player.set_rating(rating);
        }
    }

    /// Freeze every known player's current rating as the record for `season`
    pub fn lock_season(&mut self, season: Season) {
        for player in self.players.values_mut() {
            player.lock_season_rating(season);
        }
    }

    /// Locked rating of `name` for `season`; `None` when the player had no
    /// recorded rating by that season (absence is routine, not an error)
    pub fn season_rating(&self, name: &str, season: Season) -> Option<Rating> {
        self.players.get(name)?.season_rating(season)
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players ordered by current exposure descending, names ascending on
    /// ties
    pub fn current_ranking(&self) -> Vec<(PlayerName, Rating)> {
        let entries = self
            .players
            .values()
            .map(|player| (player.name.clone(), player.rating));
        Self::rank_by_exposure(entries)
    }

    /// Players with a locked rating for `season`, same ordering rule
    pub fn season_ranking(&self, season: Season) -> Vec<(PlayerName, Rating)> {
        let entries = self.players.values().filter_map(|player| {
            player
                .season_rating(season)
                .map(|rating| (player.name.clone(), rating))
        });
        Self::rank_by_exposure(entries)
    }

    fn rank_by_exposure(
        entries: impl Iterator<Item = (PlayerName, Rating)>,
    ) -> Vec<(PlayerName, Rating)> {
        let mut ranking: Vec<(PlayerName, Rating)> = entries.collect();
        // Stable sort over name-ordered input keeps equal exposures in name
        // order.
        ranking.sort_by(|a, b| {
            b.1.exposure()
                .partial_cmp(&a.1.exposure())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranking
    }
}
