//! Season-sequenced replay of the match history and read-only queries

use crate::error::TournamentError;
use crate::ledger::{Player, PlayerLedger};
use crate::rating::{TrueSkillModel, TrueSkillModelConfig};
use crate::summary::{self, PlayerSummary, TeamSummary};
use crate::types::{Match, PlayerName, Rating, Season};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Rating engine for a multi-season 2v2 tournament.
///
/// Construction replays the entire match history deterministically in one
/// pass: matches are grouped by season, seasons run in ascending order, and a
/// season lock freezes every player's rating before the next season starts.
/// A rating recorded for season N therefore reflects exactly the outcomes of
/// seasons 1..=N. After construction the engine is never written to; all
/// queries are pure reads.
#[derive(Debug, Clone)]
pub struct TournamentEngine {
    /// Full match list in input order, used by win-rate and summary queries
    matches: Vec<Match>,
    /// Matches grouped by season, ascending; input order kept within a season
    seasons: BTreeMap<Season, Vec<Match>>,
    ledger: PlayerLedger,
    model: TrueSkillModel,
}

impl TournamentEngine {
    /// Build the engine with the default TrueSkill parameterization
    pub fn with_defaults(matches: Vec<Match>) -> crate::error::Result<Self> {
        Self::new(matches, TrueSkillModelConfig::default())
    }

    /// Build the engine and replay the whole match history.
    ///
    /// Grouping is a stable bucketing pass, so the input does not have to be
    /// pre-sorted by season: a season's matches are merged into one group no
    /// matter where they appear, and their relative order is preserved.
    pub fn new(matches: Vec<Match>, config: TrueSkillModelConfig) -> crate::error::Result<Self> {
        let model = TrueSkillModel::new(config)?;

        let mut seasons: BTreeMap<Season, Vec<Match>> = BTreeMap::new();
        for m in &matches {
            seasons.entry(m.season).or_default().push(m.clone());
        }

        let mut engine = Self {
            matches,
            seasons,
            ledger: PlayerLedger::new(),
            model,
        };
        engine.replay();
        Ok(engine)
    }

    fn replay(&mut self) {
        let season_groups: Vec<(Season, Vec<Match>)> = self
            .seasons
            .iter()
            .map(|(season, group)| (*season, group.clone()))
            .collect();

        for (season, group) in season_groups {
            debug!(season, match_count = group.len(), "Replaying season");
            for m in &group {
                self.replay_match(m);
            }
            self.ledger.lock_season(season);
        }

        info!(
            seasons = self.seasons.len(),
            matches = self.matches.len(),
            players = self.ledger.len(),
            "Tournament replay complete"
        );
    }

    fn replay_match(&mut self, m: &Match) {
        let baseline = self.model.baseline_rating();
        let win1 = self.ledger.get_or_create(&m.win1, m.season, baseline).rating;
        let win2 = self.ledger.get_or_create(&m.win2, m.season, baseline).rating;
        let lose1 = self.ledger.get_or_create(&m.lose1, m.season, baseline).rating;
        let lose2 = self.ledger.get_or_create(&m.lose2, m.season, baseline).rating;

        let (winners, losers) = self.model.rate_teams([win1, win2], [lose1, lose2]);

        self.ledger.set_current_rating(&m.win1, winners[0]);
        self.ledger.set_current_rating(&m.win2, winners[1]);
        self.ledger.set_current_rating(&m.lose1, losers[0]);
        self.ledger.set_current_rating(&m.lose2, losers[1]);
    }

    /// All seasons present in the match history, ascending
    pub fn seasons(&self) -> Vec<Season> {
        self.seasons.keys().copied().collect()
    }

    /// Season axis for time-series reporting: the pre-debut baseline column
    /// (season 0) followed by every played season
    pub fn season_axis(&self) -> Vec<Season> {
        let mut axis = vec![0];
        axis.extend(self.seasons());
        axis
    }

    /// Full match list in input order
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.ledger.get(name)
    }

    pub fn ledger(&self) -> &PlayerLedger {
        &self.ledger
    }

    pub fn model(&self) -> &TrueSkillModel {
        &self.model
    }

    /// All players ranked by current exposure, best first
    pub fn current_ranking(&self) -> Vec<(PlayerName, Rating)> {
        self.ledger.current_ranking()
    }

    /// Players ranked by their locked rating for `season`
    pub fn season_ranking(&self, season: Season) -> Vec<(PlayerName, Rating)> {
        self.ledger.season_ranking(season)
    }

    /// Rating the player carried into `season`, i.e. their snapshot for
    /// `season - 1`. `None` when the player had not debuted by then.
    pub fn player_rating_before_season(&self, name: &str, season: Season) -> Option<Rating> {
        let previous = season.checked_sub(1)?;
        self.ledger.season_rating(name, previous)
    }

    /// Predictive win probability for a match: uses each participant's rating
    /// as of the season before the match, never post-match ratings.
    ///
    /// A match referencing an unknown player, or a season before a
    /// participant's debut, indicates a caller bug and fails fast.
    pub fn match_probability(&self, m: &Match) -> crate::error::Result<f64> {
        let winners = [
            self.pre_season_rating(&m.win1, m.season)?,
            self.pre_season_rating(&m.win2, m.season)?,
        ];
        let losers = [
            self.pre_season_rating(&m.lose1, m.season)?,
            self.pre_season_rating(&m.lose2, m.season)?,
        ];

        Ok(self.model.win_probability(&winners, &losers))
    }

    fn pre_season_rating(&self, name: &str, season: Season) -> crate::error::Result<Rating> {
        if !self.ledger.contains(name) {
            return Err(TournamentError::UnknownPlayer {
                name: name.to_string(),
            }
            .into());
        }

        self.player_rating_before_season(name, season).ok_or_else(|| {
            TournamentError::MissingSeasonRating {
                name: name.to_string(),
                season: season.saturating_sub(1),
            }
            .into()
        })
    }

    /// Fraction of matches the player won, over every match they appear in.
    /// `None` when the player appears in no match at all (the 0/0 case is
    /// defined as absent, never NaN).
    pub fn player_win_rate(&self, name: &str) -> Option<f64> {
        let mut wins = 0u32;
        let mut losses = 0u32;
        for m in self.matches.iter().filter(|m| m.involves(name)) {
            if m.winners().iter().any(|p| p.as_str() == name) {
                wins += 1;
            } else {
                losses += 1;
            }
        }

        let total = wins + losses;
        if total == 0 {
            return None;
        }
        Some(f64::from(wins) / f64::from(total))
    }

    /// Exposure of the player at each point of [`Self::season_axis`], `None`
    /// where no snapshot exists. `None` overall for unknown players.
    pub fn player_exposure_series(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let player = self.ledger.get(name)?;
        Some(player.seasons_exposure(&self.season_axis()))
    }

    /// Per-player win/loss counts broken out by tier
    pub fn players_summary(&self) -> BTreeMap<PlayerName, PlayerSummary> {
        summary::players_summary(&self.matches)
    }

    /// Per-team win/loss counts, keyed by the canonical unordered pair
    pub fn teams_summary(&self) -> BTreeMap<String, TeamSummary> {
        summary::teams_summary(&self.matches)
    }
}
