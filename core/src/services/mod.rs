//! Business services containing domain logic and use cases.

pub mod booking_number;
pub mod dashboard;
pub mod pricing;
pub mod seed;

// Re-export commonly used types
pub use booking_number::{generate_booking_number, generate_booking_number_at};
pub use dashboard::{build_dashboard_stats, DEFAULT_RECENT_LIMIT};
pub use pricing::{
    calculate_number_of_days, calculate_taxi_price, calculate_vehicle_booking_price,
    is_date_range_valid, round_money, TaxiPriceBreakdown, VehiclePriceBreakdown,
};
pub use seed::{SeedData, SeedReport, SeedService};

#[cfg(test)]
mod tests;
