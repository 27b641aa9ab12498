//! Main application configuration
//!
//! Settings come from environment variables or a TOML file, falling back to
//! defaults, and are validated before use.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "pitch-elo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid {} value: {}", name, value))
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let config = Self::default().with_env_overrides()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys use defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of `self`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        if let Ok(k) = env::var("ELO_K_FACTOR") {
            self.rating.k_factor = parse_var("ELO_K_FACTOR", &k)?;
        }
        if let Ok(initial) = env::var("ELO_INITIAL_RATING") {
            self.rating.initial_rating = parse_var("ELO_INITIAL_RATING", &initial)?;
        }
        if let Ok(min) = env::var("ELO_MIN_RATING") {
            self.rating.min_rating = parse_var("ELO_MIN_RATING", &min)?;
        }
        if let Ok(max) = env::var("ELO_MAX_RATING") {
            self.rating.max_rating = parse_var("ELO_MAX_RATING", &max)?;
        }
        if let Ok(captain) = env::var("CAPTAIN_MIN_RATING") {
            self.rating.captain_min_rating = parse_var("CAPTAIN_MIN_RATING", &captain)?;
        }

        Ok(self)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.rating.validate()
}
