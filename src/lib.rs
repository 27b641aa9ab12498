//! Pitch ELO - ratings and rank tiers for recreational football matchmaking
//!
//! This crate provides an ELO engine over a fixed table of rank tiers, team
//! balancing helpers, and match settlement for competitive game modes. All
//! engine functions are pure; callers own and store ratings.

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{EloError, Result};
pub use types::*;

// Re-export key components
pub use rating::{
    elo_delta, progress_within_tier, rank_for_rating, team_average_rating, EloRatingCalculator,
    RankTable, RankTier, RatingCalculator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
