//! TrueSkill rating model implementation
//!
//! This module wraps the two-team TrueSkill update from the skillratings
//! crate behind the engine's `Rating` type, and computes win probabilities
//! directly from the Gaussian performance model.

use crate::types::Rating;
use serde::{Deserialize, Serialize};
use skillratings::trueskill::{trueskill_two_teams, TrueSkillConfig, TrueSkillRating};
use skillratings::Outcomes;

/// Default initial mean skill for a new player
pub const DEFAULT_INITIAL_RATING: f64 = 2000.0;

/// Default initial uncertainty for a new player
pub const DEFAULT_INITIAL_UNCERTAINTY: f64 = 200.0;

/// Extended configuration for the TrueSkill rating model
/// This wraps the skillratings TrueSkillConfig with the baseline parameters
/// handed to newly created players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrueSkillModelConfig {
    /// Core TrueSkill parameters (beta, dynamics factor, draw probability)
    pub trueskill_config: TrueSkillConfig,
    /// Initial rating for new players
    pub initial_rating: f64,
    /// Initial uncertainty for new players
    pub initial_uncertainty: f64,
}

impl Default for TrueSkillModelConfig {
    fn default() -> Self {
        Self {
            trueskill_config: TrueSkillConfig {
                // beta = sigma / 2, tau = sigma / 100
                beta: DEFAULT_INITIAL_UNCERTAINTY / 2.0,
                default_dynamics: DEFAULT_INITIAL_UNCERTAINTY / 100.0,
                // This domain plays matches to completion; draws do not exist.
                draw_probability: 0.0,
            },
            initial_rating: DEFAULT_INITIAL_RATING,
            initial_uncertainty: DEFAULT_INITIAL_UNCERTAINTY,
        }
    }
}

impl TrueSkillModelConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.trueskill_config.beta <= 0.0 {
            return Err(crate::error::TournamentError::ConfigurationError {
                message: "Beta must be positive".to_string(),
            }
            .into());
        }

        if self.trueskill_config.default_dynamics < 0.0 {
            return Err(crate::error::TournamentError::ConfigurationError {
                message: "Dynamics factor must be non-negative".to_string(),
            }
            .into());
        }

        if !(0.0..1.0).contains(&self.trueskill_config.draw_probability) {
            return Err(crate::error::TournamentError::ConfigurationError {
                message: "Draw probability must be in [0, 1)".to_string(),
            }
            .into());
        }

        if self.initial_uncertainty <= 0.0 {
            return Err(crate::error::TournamentError::ConfigurationError {
                message: "Initial uncertainty must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// TrueSkill rating model for 2v2 team matches
#[derive(Debug, Clone)]
pub struct TrueSkillModel {
    config: TrueSkillModelConfig,
}

impl Default for TrueSkillModel {
    fn default() -> Self {
        Self {
            config: TrueSkillModelConfig::default(),
        }
    }
}

impl TrueSkillModel {
    /// Create a new TrueSkill rating model
    pub fn new(config: TrueSkillModelConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Get the baseline rating assigned to players before their first match
    pub fn baseline_rating(&self) -> Rating {
        Rating::new(self.config.initial_rating, self.config.initial_uncertainty)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &TrueSkillModelConfig {
        &self.config
    }

    /// Update both teams' ratings given that `winners` beat `losers`.
    ///
    /// Returns `(new_winner_ratings, new_loser_ratings)` in slot order.
    /// Winners' means rise, losers' fall, and every uncertainty shrinks.
    /// Deterministic for identical inputs.
    pub fn rate_teams(
        &self,
        winners: [Rating; 2],
        losers: [Rating; 2],
    ) -> ([Rating; 2], [Rating; 2]) {
        let team_one: [TrueSkillRating; 2] = [winners[0].into(), winners[1].into()];
        let team_two: [TrueSkillRating; 2] = [losers[0].into(), losers[1].into()];

        let (new_one, new_two) = trueskill_two_teams(
            &team_one,
            &team_two,
            &Outcomes::WIN,
            &self.config.trueskill_config,
        );

        (
            [new_one[0].into(), new_one[1].into()],
            [new_two[0].into(), new_two[1].into()],
        )
    }

    /// Probability that `team_one` beats `team_two`.
    ///
    /// Computed as `Φ(Δμ / sqrt(N·β² + Σσ²))` over all N participants, with
    /// `Δμ` the difference of the team mean sums. Evenly matched teams get
    /// exactly 0.5, and `win_probability(a, b) + win_probability(b, a) == 1`.
    pub fn win_probability(&self, team_one: &[Rating], team_two: &[Rating]) -> f64 {
        let delta_mu: f64 =
            team_one.iter().map(|r| r.mu).sum::<f64>() - team_two.iter().map(|r| r.mu).sum::<f64>();
        let sum_sigma_sq: f64 = team_one
            .iter()
            .chain(team_two.iter())
            .map(|r| r.sigma * r.sigma)
            .sum();

        let size = (team_one.len() + team_two.len()) as f64;
        let beta = self.config.trueskill_config.beta;
        let denom = (size * beta * beta + sum_sigma_sq).sqrt();

        standard_normal_cdf(delta_mu / denom)
    }
}

/// Standard normal CDF: `Φ(x) = (1 + erf(x / sqrt(2))) / 2`.
///
/// `erf` is odd with `erf(0) == 0`, so `Φ(0) == 0.5` exactly and
/// `Φ(x) + Φ(-x) == 1` up to a final rounding.
fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Error function, accurate to near machine precision.
///
/// Small arguments use the Maclaurin series (no cancellation below 2);
/// large arguments go through the complementary-function continued
/// fraction, where the series would lose digits.
fn erf(x: f64) -> f64 {
    let ax = x.abs();
    if ax <= 2.0 {
        return erf_series(x);
    }

    let tail = 1.0 - erfc_continued_fraction(ax);
    if x < 0.0 {
        -tail
    } else {
        tail
    }
}

/// `erf(x) = 2/sqrt(pi) * sum_n (-1)^n x^(2n+1) / (n! (2n+1))` for |x| <= 2
fn erf_series(x: f64) -> f64 {
    let mut term = std::f64::consts::FRAC_2_SQRT_PI * x;
    let mut sum = term;
    let mut n = 1.0;
    // Factorial growth terminates this quickly; 200 is a hard safety cap.
    for _ in 0..200 {
        term *= -x * x / n;
        let contribution = term / (2.0 * n + 1.0);
        sum += contribution;
        if contribution.abs() < 1e-17 {
            break;
        }
        n += 1.0;
    }
    sum
}

/// `erfc(x) = exp(-x^2)/sqrt(pi) / (x + (1/2)/(x + (2/2)/(x + ...)))`,
/// with the continued fraction evaluated by the modified Lentz method
/// until the running product stabilizes
fn erfc_continued_fraction(x: f64) -> f64 {
    const TINY: f64 = 1e-30;

    let mut f = x;
    let mut c = x;
    let mut d = 0.0;
    for j in 1..=500 {
        let a = f64::from(j) / 2.0;
        d = x + a * d;
        if d == 0.0 {
            d = TINY;
        }
        c = x + a / c;
        if c == 0.0 {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = c * d;
        f *= delta;
        if (delta - 1.0).abs() < 1e-17 {
            break;
        }
    }

    (-x * x).exp() / (std::f64::consts::PI.sqrt() * f)
}
