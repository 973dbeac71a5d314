//! In-memory SeedRepository with the store's key constraints

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Admin, Customer, Location, Vehicle, VehicleCategory};
use crate::errors::{DomainError, StorageErrorCode};

use super::trait_::SeedRepository;

/// Mock seed repository for testing
#[derive(Clone, Default)]
pub struct MockSeedRepository {
    locations: Arc<RwLock<HashMap<String, Location>>>,
    categories: Arc<RwLock<HashMap<String, VehicleCategory>>>,
    vehicles: Arc<RwLock<HashMap<Uuid, Vehicle>>>,
    admins: Arc<RwLock<HashMap<String, Admin>>>,
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl MockSeedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn locations(&self) -> Vec<Location> {
        self.locations.read().await.values().cloned().collect()
    }

    pub async fn categories(&self) -> Vec<VehicleCategory> {
        self.categories.read().await.values().cloned().collect()
    }

    pub async fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.read().await.values().cloned().collect()
    }

    pub async fn admin(&self, email: &str) -> Option<Admin> {
        self.admins.read().await.get(email).cloned()
    }

    pub async fn customers(&self) -> Vec<Customer> {
        self.customers.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl SeedRepository for MockSeedRepository {
    async fn upsert_location(&self, location: &Location) -> Result<Location, DomainError> {
        let mut locations = self.locations.write().await;
        Ok(locations
            .entry(location.id.clone())
            .or_insert_with(|| location.clone())
            .clone())
    }

    async fn upsert_category(&self, category: &VehicleCategory) -> Result<VehicleCategory, DomainError> {
        let mut categories = self.categories.write().await;
        Ok(categories
            .entry(category.name.clone())
            .or_insert_with(|| category.clone())
            .clone())
    }

    async fn create_vehicle(&self, vehicle: &Vehicle) -> Result<Vehicle, DomainError> {
        if !self.locations.read().await.contains_key(&vehicle.location_id) {
            return Err(DomainError::storage(
                StorageErrorCode::ForeignKeyViolation,
                format!("Unknown location {}", vehicle.location_id),
            ));
        }

        let mut vehicles = self.vehicles.write().await;
        if vehicles
            .values()
            .any(|v| v.registration_no == vehicle.registration_no)
        {
            return Err(DomainError::storage(
                StorageErrorCode::UniqueViolation,
                format!("Duplicate registration number {}", vehicle.registration_no),
            ));
        }

        vehicles.insert(vehicle.id, vehicle.clone());
        Ok(vehicle.clone())
    }

    async fn upsert_admin(&self, admin: &Admin) -> Result<Admin, DomainError> {
        let mut admins = self.admins.write().await;
        Ok(admins
            .entry(admin.email.clone())
            .or_insert_with(|| admin.clone())
            .clone())
    }

    async fn create_customer(&self, customer: &Customer) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;
        if customers.values().any(|c| c.email == customer.email) {
            return Err(DomainError::storage(
                StorageErrorCode::UniqueViolation,
                format!("Duplicate customer email {}", customer.email),
            ));
        }

        customers.insert(customer.id, customer.clone());
        Ok(customer.clone())
    }
}
