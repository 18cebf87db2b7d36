//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `PODIUM` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use podium::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let policy = config.screening.policy();
//! ```

mod error;
mod screening;

pub use error::{ConfigError, ConfigValidationError};
pub use screening::ScreeningSettings;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults, so an empty environment yields the
/// canonical screening policy.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Screening list overrides.
    #[serde(default)]
    pub screening: ScreeningSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `PODIUM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Parses list values as comma-separated
    ///
    /// # Environment Variable Format
    ///
    /// - `PODIUM__SCREENING__REQUIRED_CERTIFICATIONS=2`
    /// - `PODIUM__SCREENING__BLOCKED_EMAIL_DOMAINS=aol.com,hotmail.com`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PODIUM")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("screening.approved_employers")
                    .with_list_parse_key("screening.blocked_email_domains")
                    .with_list_parse_key("screening.obsolete_technologies"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any configuration value is
    /// invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.screening.validate()?;
        Ok(())
    }
}
