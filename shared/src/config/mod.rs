//! Configuration module with business-specific sub-modules
//!
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `pricing` - Tax, currency and pagination defaults
//! - `server` - HTTP server and CORS configuration

pub mod database;
pub mod environment;
pub mod pricing;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use pricing::{PaginationConfig, PricingConfig, DEFAULT_TAX_RATE};
pub use server::ServerConfig;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    Missing(String),
}

/// Read an environment variable, falling back to `default`
///
/// An unset or empty variable with no default is an error.
pub fn env_var(key: &str, default: Option<&str>) -> Result<String, ConfigError> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| default.map(String::from))
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Parse an environment variable, keeping `default` when unset or malformed
pub(crate) fn parse_env_or<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring malformed value for {}: {:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

pub fn is_production() -> bool {
    Environment::from_env().is_production()
}

pub fn is_development() -> bool {
    Environment::from_env().is_development()
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,

    pub server: ServerConfig,

    /// Absent when `DATABASE_URL` is not set
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: None,
            pricing: PricingConfig::default(),
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env().ok(),
            pricing: PricingConfig::from_env(),
            pagination: PaginationConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}
