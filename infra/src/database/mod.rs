//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - Constraint-violation classification
//! - Repository implementations

pub mod connection;
pub mod errors;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{connect_options, DatabaseHealth, DatabasePool, PoolStatistics};
pub use errors::{map_sqlx_error, storage_code};
pub use mysql::MySqlSeedRepository;
