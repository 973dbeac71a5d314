//! Value objects: request inputs, computed results and filters.

pub mod booking_input;
pub mod customer_input;
pub mod dashboard;
pub mod filters;
pub mod taxi;

// Re-export commonly used types
pub use booking_input::{
    ConfirmBookingInput, CreateTaxiBookingInput, CreateVehicleBookingInput, CustomerRef,
    VehicleAvailabilityQuery,
};
pub use customer_input::CustomerInput;
pub use dashboard::{DashboardStats, PendingStats, PeriodStats};
pub use filters::BookingFilters;
pub use taxi::{TaxiPriceCalculation, TaxiRouteCalculationInput, TaxiRouteResult};

#[cfg(test)]
mod tests;
