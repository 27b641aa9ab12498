//! ELO engine
//!
//! Stateless functions over integer ratings. Expected scores come from the
//! skillratings crate's ELO model; everything is rounded half away from zero
//! so deltas and averages are deterministic.

use crate::rating::ranks::RankTier;
use crate::types::{Rated, Rating};
use skillratings::elo::EloRating;

/// Conventional K-factor
pub const DEFAULT_K_FACTOR: i32 = 32;

/// Parameters for ELO updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EloConfig {
    pub k_factor: i32,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
        }
    }
}

impl EloConfig {
    pub fn new(k_factor: i32) -> Self {
        Self { k_factor }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.k_factor <= 0 {
            return Err(crate::error::EloError::ConfigurationError {
                message: format!("K-factor must be positive, got {}", self.k_factor),
            }
            .into());
        }
        Ok(())
    }
}

/// Probability that `player_rating` beats `opponent_rating`
pub fn expected_score(player_rating: Rating, opponent_rating: Rating) -> f64 {
    let player = EloRating {
        rating: f64::from(player_rating),
    };
    let opponent = EloRating {
        rating: f64::from(opponent_rating),
    };

    let (expected, _) = skillratings::elo::expected_score(&player, &opponent);
    expected
}

/// Rating change for a player after a decided match
///
/// `round(k * (actual - expected))`, positive on a gain. The K-factor is not
/// checked here; validate it through [`EloConfig::validate`].
pub fn elo_delta(
    player_rating: Rating,
    opponent_rating: Rating,
    player_won: bool,
    k_factor: i32,
) -> i32 {
    let actual = if player_won { 1.0 } else { 0.0 };
    let expected = expected_score(player_rating, opponent_rating);

    (f64::from(k_factor) * (actual - expected)).round() as i32
}

/// [`elo_delta`] with the default K-factor of 32
pub fn elo_delta_default(player_rating: Rating, opponent_rating: Rating, player_won: bool) -> i32 {
    elo_delta(player_rating, opponent_rating, player_won, DEFAULT_K_FACTOR)
}

/// Rounded mean rating of a team; 0 for an empty team
///
/// A 0 here means "no data", not a real average.
pub fn team_average_rating<P: Rated>(players: &[P]) -> Rating {
    if players.is_empty() {
        return 0;
    }

    let sum: i64 = players.iter().map(|p| i64::from(p.rating())).sum();
    (sum as f64 / players.len() as f64).round() as Rating
}

/// How far `rating` has climbed through `tier`, as a percentage in [0, 100]
///
/// The result is clamped, so a rating outside the tier reads as 0 or 100.
/// Zero-width tiers report 0.
pub fn progress_within_tier(rating: Rating, tier: &RankTier) -> f64 {
    let span = tier.span();
    if span == 0 {
        return 0.0;
    }

    let progress = f64::from(rating) - f64::from(tier.min_elo);
    (progress / span as f64 * 100.0).clamp(0.0, 100.0)
}
