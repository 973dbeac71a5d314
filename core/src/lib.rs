//! # Safiri Core
//!
//! Core business logic and domain layer for the Safiri backend.
//! This crate contains domain entities, pricing and booking-number rules,
//! the seed routine, repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::{AppError, DomainError, DomainResult, ErrorKind, StorageErrorCode};
pub use repositories::{MockSeedRepository, SeedRepository};
pub use services::{
    build_dashboard_stats, calculate_number_of_days, calculate_taxi_price,
    calculate_vehicle_booking_price, generate_booking_number, generate_booking_number_at,
    is_date_range_valid, round_money, SeedData, SeedReport, SeedService, TaxiPriceBreakdown,
    VehiclePriceBreakdown, DEFAULT_RECENT_LIMIT,
};
