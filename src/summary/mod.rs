//! Win/loss tabulation per player and per team, broken out by match tier
//!
//! Purely additive counters accumulated in a single pass over the match list.
//! Win rates over zero matches are `None`, never NaN.

use crate::types::{Match, PlayerName, Tier};
use crate::utils::team_key;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-tier match counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub sf: u32,
    pub wf: u32,
    pub lf: u32,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Semifinal => self.sf,
            Tier::WinnerFinal => self.wf,
            Tier::LoserFinal => self.lf,
        }
    }

    fn bump(&mut self, tier: Tier) {
        match tier {
            Tier::Semifinal => self.sf += 1,
            Tier::WinnerFinal => self.wf += 1,
            Tier::LoserFinal => self.lf += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.sf + self.wf + self.lf
    }
}

/// Per-player win/loss counts, broken out by tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub wins: TierCounts,
    pub losses: TierCounts,
}

impl PlayerSummary {
    pub fn record_win(&mut self, tier: Tier) {
        self.wins.bump(tier);
    }

    pub fn record_loss(&mut self, tier: Tier) {
        self.losses.bump(tier);
    }

    /// Matches played in one tier, win or lose
    pub fn matches_for(&self, tier: Tier) -> u32 {
        self.wins.get(tier) + self.losses.get(tier)
    }

    pub fn total_matches(&self) -> u32 {
        self.wins.total() + self.losses.total()
    }

    /// Win rate within one tier; `None` when no matches were played there
    pub fn win_rate_for(&self, tier: Tier) -> Option<f64> {
        let played = self.matches_for(tier);
        if played == 0 {
            return None;
        }
        Some(f64::from(self.wins.get(tier)) / f64::from(played))
    }

    /// Win rate across all tiers; `None` when no matches were played
    pub fn total_win_rate(&self) -> Option<f64> {
        let played = self.total_matches();
        if played == 0 {
            return None;
        }
        Some(f64::from(self.wins.total()) / f64::from(played))
    }
}

/// Win/loss counts for one 2-player team (unordered pair)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub wins: u32,
    pub losses: u32,
}

impl TeamSummary {
    pub fn total(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> Option<f64> {
        if self.total() == 0 {
            return None;
        }
        Some(f64::from(self.wins) / f64::from(self.total()))
    }
}

/// Accumulate per-player win/loss counts for all four participants of every
/// match
pub fn players_summary(matches: &[Match]) -> BTreeMap<PlayerName, PlayerSummary> {
    let mut summary: BTreeMap<PlayerName, PlayerSummary> = BTreeMap::new();
    for m in matches {
        for name in m.winners() {
            summary.entry(name.clone()).or_default().record_win(m.tier);
        }
        for name in m.losers() {
            summary.entry(name.clone()).or_default().record_loss(m.tier);
        }
    }
    summary
}

/// Accumulate win/loss counts per team, keyed by the canonical unordered pair
pub fn teams_summary(matches: &[Match]) -> BTreeMap<String, TeamSummary> {
    let mut summary: BTreeMap<String, TeamSummary> = BTreeMap::new();
    for m in matches {
        summary
            .entry(team_key(&m.win1, &m.win2))
            .or_default()
            .wins += 1;
        summary
            .entry(team_key(&m.lose1, &m.lose2))
            .or_default()
            .losses += 1;
    }
    summary
}
