//! API-level configuration

pub mod error_config;

pub use error_config::{current_environment, init_environment};
