//! Shared utilities and common types for the Safiri server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The application error taxonomy
//! - Response envelopes and pagination
//! - Utility functions (phone, email, dates, currency, text)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LoggingConfig, PaginationConfig, PricingConfig,
    ServerConfig,
};
pub use errors::{error_codes, AppError, AppResult, ErrorKind};
pub use types::{
    ApiResponse, DateRange, PaginatedResponse, PaginationMeta, PaginationParams,
    PaginationResult,
};
pub use utils::{currency, date, phone, text, validation};
