//! Rating calculator trait and the ELO implementation
//!
//! A calculator settles a finished match between two teams into per-player
//! rating changes. The ELO calculator rates each player against the opposing
//! team's average.

use crate::config::RatingConfig;
use crate::error::EloError;
use crate::rating::elo::{elo_delta, team_average_rating};
use crate::types::{GameMode, Player, Rating, RatingChange};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of settling a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCalculationResult {
    /// Rating changes for the home team followed by the away team
    pub rating_changes: Vec<RatingChange>,
    pub home_average: Rating,
    pub away_average: Rating,
}

impl RatingCalculationResult {
    /// Change recorded for `player_id`, if they took part
    pub fn change_for(&self, player_id: &str) -> Option<&RatingChange> {
        self.rating_changes
            .iter()
            .find(|change| change.player_id == player_id)
    }
}

/// Trait for calculating rating changes after games
pub trait RatingCalculator: Send + Sync {
    /// Calculate rating changes for both teams of a decided match
    ///
    /// # Arguments
    /// * `mode` - Game mode; modes that do not affect ELO yield zero deltas
    /// * `home` - Players on the home team
    /// * `away` - Players on the away team
    /// * `home_won` - Whether the home team won
    fn calculate_rating_changes(
        &self,
        mode: GameMode,
        home: &[Player],
        away: &[Player],
        home_won: bool,
    ) -> crate::error::Result<RatingCalculationResult>;

    /// Get the initial rating for new players
    fn initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}

/// ELO rating calculator implementation
#[derive(Debug, Clone, Default)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new ELO rating calculator
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Apply `delta` to `rating`, keeping the result inside configured bounds
    pub fn apply_delta(&self, rating: Rating, delta: i32) -> Rating {
        let raw = rating.saturating_add(delta);
        let clamped = raw.clamp(self.config.min_rating, self.config.max_rating);
        if clamped != raw {
            warn!(
                "Rating {} clamped to {} (bounds {}..={})",
                raw, clamped, self.config.min_rating, self.config.max_rating
            );
        }
        clamped
    }

    fn settle_team(
        &self,
        mode: GameMode,
        team: &[Player],
        own_average: Rating,
        opponent_average: Rating,
        won: bool,
    ) -> Vec<RatingChange> {
        let delta = if mode.affects_elo() {
            elo_delta(own_average, opponent_average, won, self.config.k_factor)
        } else {
            0
        };

        team.iter()
            .map(|player| {
                let new_rating = if delta == 0 {
                    player.rating
                } else {
                    self.apply_delta(player.rating, delta)
                };

                RatingChange {
                    player_id: player.id.clone(),
                    old_rating: player.rating,
                    new_rating,
                    delta: new_rating.saturating_sub(player.rating),
                }
            })
            .collect()
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn calculate_rating_changes(
        &self,
        mode: GameMode,
        home: &[Player],
        away: &[Player],
        home_won: bool,
    ) -> crate::error::Result<RatingCalculationResult> {
        if home.is_empty() || away.is_empty() {
            return Err(EloError::InvalidTeam {
                reason: "Both teams need at least one player".to_string(),
            }
            .into());
        }

        let home_average = team_average_rating(home);
        let away_average = team_average_rating(away);

        debug!(
            "Settling {} match: home avg {} vs away avg {}, home_won={}",
            mode, home_average, away_average, home_won
        );

        let mut rating_changes = self.settle_team(mode, home, home_average, away_average, home_won);
        rating_changes.extend(self.settle_team(mode, away, away_average, home_average, !home_won));

        Ok(RatingCalculationResult {
            rating_changes,
            home_average,
            away_average,
        })
    }

    fn initial_rating(&self) -> Rating {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        let new_config: RatingConfig =
            serde_json::from_value(config).map_err(|e| EloError::ConfigurationError {
                message: format!("Invalid rating configuration: {}", e),
            })?;

        new_config.validate()?;
        debug!("Rating configuration updated: {:?}", new_config);
        self.config = new_config;
        Ok(())
    }
}
