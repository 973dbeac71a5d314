//! Route handlers grouped by resource

pub mod categories;
pub mod health;
pub mod quotes;
