//! Error types for the rating engine
//!
//! The pure engine functions never fail. Errors only come out of the strict
//! rank lookup, match settlement and configuration handling.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum EloError {
    #[error("No rank tier covers rating {rating}")]
    Unranked { rating: i32 },

    #[error("Invalid team: {reason}")]
    InvalidTeam { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
