//! Rating system configuration

use crate::error::EloError;
use crate::rating::elo::{EloConfig, DEFAULT_K_FACTOR};
use crate::rating::ranks::TOP_TIER_SENTINEL;
use crate::rating::team::DEFAULT_CAPTAIN_MIN_RATING;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

/// Parameters governing rating updates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub k_factor: i32,
    /// Rating given to newly registered players
    pub initial_rating: Rating,
    /// Lower clamp applied after a match
    pub min_rating: Rating,
    /// Upper clamp applied after a match
    pub max_rating: Rating,
    pub captain_min_rating: Rating,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            initial_rating: 1250,
            min_rating: 0,
            max_rating: TOP_TIER_SENTINEL,
            captain_min_rating: DEFAULT_CAPTAIN_MIN_RATING,
        }
    }
}

impl RatingConfig {
    pub fn elo(&self) -> EloConfig {
        EloConfig::new(self.k_factor)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        self.elo().validate()?;

        if self.min_rating > self.max_rating {
            return Err(EloError::ConfigurationError {
                message: format!(
                    "Minimum rating {} exceeds maximum rating {}",
                    self.min_rating, self.max_rating
                ),
            }
            .into());
        }

        if self.initial_rating < self.min_rating || self.initial_rating > self.max_rating {
            return Err(EloError::ConfigurationError {
                message: format!(
                    "Initial rating {} outside {}..={}",
                    self.initial_rating, self.min_rating, self.max_rating
                ),
            }
            .into());
        }

        Ok(())
    }
}
