//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};
use skillratings::trueskill::TrueSkillRating;

/// Unique identifier for players
pub type PlayerName = String;

/// Season number (1-based; season 0 holds pre-debut baselines)
pub type Season = u32;

/// Multiplier applied to uncertainty when deriving a conservative
/// skill estimate. Rankings never compare means directly.
pub const EXPOSURE_K: f64 = 3.0;

/// Bracket classification of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "sf")]
    Semifinal,
    #[serde(rename = "wf")]
    WinnerFinal,
    #[serde(rename = "lf")]
    LoserFinal,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Semifinal => write!(f, "sf"),
            Tier::WinnerFinal => write!(f, "wf"),
            Tier::LoserFinal => write!(f, "lf"),
        }
    }
}

/// Skill estimate for a player: mean and uncertainty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sigma: f64,
}

impl Rating {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Conservative skill estimate used for all ranking and ordering:
    /// `mu - EXPOSURE_K * sigma`, so uncertain players are not overranked.
    pub fn exposure(&self) -> f64 {
        self.mu - EXPOSURE_K * self.sigma
    }
}

impl From<TrueSkillRating> for Rating {
    fn from(rating: TrueSkillRating) -> Self {
        Self {
            mu: rating.rating,
            sigma: rating.uncertainty,
        }
    }
}

impl From<Rating> for TrueSkillRating {
    fn from(rating: Rating) -> Self {
        Self {
            rating: rating.mu,
            uncertainty: rating.sigma,
        }
    }
}

/// One best-of contest between two 2-player teams.
///
/// `win1`/`win2` beat `lose1`/`lose2`. The engine does not validate that the
/// four slots are distinct; well-formed records are the loader's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub season: Season,
    pub win1: PlayerName,
    pub win2: PlayerName,
    pub lose1: PlayerName,
    pub lose2: PlayerName,
    pub tier: Tier,
}

impl Match {
    pub fn new(
        season: Season,
        win1: impl Into<PlayerName>,
        win2: impl Into<PlayerName>,
        lose1: impl Into<PlayerName>,
        lose2: impl Into<PlayerName>,
        tier: Tier,
    ) -> Self {
        Self {
            season,
            win1: win1.into(),
            win2: win2.into(),
            lose1: lose1.into(),
            lose2: lose2.into(),
            tier,
        }
    }

    /// All four participant names, winners first
    pub fn participants(&self) -> [&PlayerName; 4] {
        [&self.win1, &self.win2, &self.lose1, &self.lose2]
    }

    /// The winning pair
    pub fn winners(&self) -> [&PlayerName; 2] {
        [&self.win1, &self.win2]
    }

    /// The losing pair
    pub fn losers(&self) -> [&PlayerName; 2] {
        [&self.lose1, &self.lose2]
    }

    /// Whether the named player filled any of the four slots
    pub fn involves(&self, name: &str) -> bool {
        self.participants().iter().any(|p| p.as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_penalizes_uncertainty() {
        let confident = Rating::new(2000.0, 50.0);
        let uncertain = Rating::new(2000.0, 200.0);

        assert_eq!(confident.exposure(), 2000.0 - 3.0 * 50.0);
        assert!(confident.exposure() > uncertain.exposure());
    }

    #[test]
    fn test_rating_round_trips_through_skillratings() {
        let rating = Rating::new(2100.0, 180.0);
        let converted: TrueSkillRating = rating.into();
        let back: Rating = converted.into();

        assert_eq!(back, rating);
    }

    #[test]
    fn test_match_participants() {
        let m = Match::new(1, "ann", "bob", "cid", "dee", Tier::WinnerFinal);

        assert_eq!(m.participants(), [&"ann", &"bob", &"cid", &"dee"]);
        assert_eq!(m.winners(), [&"ann", &"bob"]);
        assert_eq!(m.losers(), [&"cid", &"dee"]);
        assert!(m.involves("cid"));
        assert!(!m.involves("eve"));
    }

    #[test]
    fn test_tier_serde_uses_short_codes() {
        assert_eq!(serde_json::to_string(&Tier::Semifinal).unwrap(), "\"sf\"");
        assert_eq!(serde_json::to_string(&Tier::WinnerFinal).unwrap(), "\"wf\"");
        assert_eq!(
            serde_json::from_str::<Tier>("\"lf\"").unwrap(),
            Tier::LoserFinal
        );
        assert_eq!(Tier::LoserFinal.to_string(), "lf");
    }
}
