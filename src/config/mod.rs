//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PLENARY_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use plenary::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod identity;
mod server;
mod sweeper;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use identity::IdentityConfig;
pub use server::{Environment, ServerConfig};
pub use sweeper::SweepConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Expiration sweep configuration
    #[serde(default)]
    pub sweep: SweepConfig,

    /// External identity service (optional; local voters table when absent)
    #[serde(default)]
    pub identity: Option<IdentityConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PLENARY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PLENARY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PLENARY__DATABASE__URL=...` -> `database.url = ...`
    /// - `PLENARY__SWEEP__INTERVAL_SECS=30` -> `sweep.interval_secs = 30`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PLENARY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.sweep.validate()?;
        if let Some(identity) = &self.identity {
            identity.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
