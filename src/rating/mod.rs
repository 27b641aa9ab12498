//! ELO rating system
//!
//! This module provides the rank table, the stateless ELO engine, team
//! building helpers, and a calculator that settles finished matches.

pub mod calculator;
pub mod elo;
pub mod ranks;
pub mod team;

// Re-export commonly used types
pub use calculator::{EloRatingCalculator, RatingCalculationResult, RatingCalculator};
pub use elo::{
    elo_delta, elo_delta_default, expected_score, progress_within_tier, team_average_rating,
    EloConfig, DEFAULT_K_FACTOR,
};
pub use ranks::{rank_for_rating, RankCategory, RankTable, RankTier, RANK_TIERS};
pub use team::{auto_balance, can_captain, filter_by_rating_range, rating_gap};
