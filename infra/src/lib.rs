//! # Infrastructure Layer
//!
//! Concrete implementations of the core repository traits.
//!
//! - **Database**: MySQL connection pool and repositories using SQLx
//! - **Seed**: the `seed` binary populating reference and demo data

// Re-export core types for convenience
pub use sf_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Configuration re-exported from the shared crate
pub mod config {
    pub use sf_shared::config::{AppConfig, ConfigError, DatabaseConfig};
}

/// Infrastructure-specific errors
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for InfrastructureError {
    fn from(error: config::ConfigError) -> Self {
        InfrastructureError::Config(error.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Database(e) => database::map_sqlx_error(e),
            other => DomainError::internal(other.to_string()),
        }
    }
}

/// Result type for infrastructure operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;
