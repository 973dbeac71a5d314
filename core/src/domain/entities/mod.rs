//! Domain entities representing core business objects.

pub mod admin;
pub mod booking;
pub mod customer;
pub mod location;
pub mod vehicle;
pub mod vehicle_category;

// Re-export commonly used types
pub use admin::{Admin, AdminRole};
pub use booking::{
    BookingStatus, BookingSummary, BookingType, PaymentMethod, PaymentStatus, TaxiBooking,
    VehicleBooking,
};
pub use customer::Customer;
pub use location::Location;
pub use vehicle::{FuelType, Transmission, Vehicle, VehicleStatus};
pub use vehicle_category::VehicleCategory;

#[cfg(test)]
mod tests;
