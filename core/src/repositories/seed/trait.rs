//! Seed repository trait defining the writes of the seed routine.
//!
//! Reference data (locations, categories, the admin) is upserted on a stable
//! key so the routine can run again; an upsert leaves an existing row
//! untouched and returns it. Vehicles and customers are plain inserts.

use async_trait::async_trait;

use crate::domain::entities::{Admin, Customer, Location, Vehicle, VehicleCategory};
use crate::errors::DomainError;

/// Repository trait for seed persistence
///
/// Implementations report constraint failures as
/// [`DomainError::Storage`] with a typed
/// [`StorageErrorCode`](crate::errors::StorageErrorCode).
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Insert a location keyed by its id, or return the stored one
    async fn upsert_location(&self, location: &Location) -> Result<Location, DomainError>;

    /// Insert a category keyed by its name, or return the stored one
    async fn upsert_category(&self, category: &VehicleCategory) -> Result<VehicleCategory, DomainError>;

    /// Insert a vehicle
    ///
    /// # Errors
    /// * `UniqueViolation` - registration number already exists
    /// * `ForeignKeyViolation` - the owning location does not exist
    async fn create_vehicle(&self, vehicle: &Vehicle) -> Result<Vehicle, DomainError>;

    /// Insert an admin keyed by email, or return the stored one
    async fn upsert_admin(&self, admin: &Admin) -> Result<Admin, DomainError>;

    /// Insert a customer
    ///
    /// # Errors
    /// * `UniqueViolation` - email already exists
    async fn create_customer(&self, customer: &Customer) -> Result<Customer, DomainError>;
}
