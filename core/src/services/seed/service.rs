use chrono::Utc;
use futures::future::try_join_all;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use super::fixtures::SeedData;
use crate::errors::DomainResult;
use crate::repositories::SeedRepository;

pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Counts of what a seed run wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub locations: usize,
    pub categories: usize,
    pub vehicles: usize,
    pub admin_email: String,
    pub customer_id: Option<Uuid>,
}

/// Writes [`SeedData`] group by group
///
/// Groups run in order: locations, categories, vehicles, admin, customer.
/// Writes within a group run concurrently and the first failure aborts the run.
pub struct SeedService<R: SeedRepository> {
    repository: Arc<R>,
    data: SeedData,
    bcrypt_cost: u32,
}

impl<R: SeedRepository> SeedService<R> {
    pub fn new(repository: Arc<R>, data: SeedData) -> Self {
        Self {
            repository,
            data,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub async fn run(&self) -> DomainResult<SeedReport> {
        let now = Utc::now();

        tracing::info!("Creating locations");
        let locations: Vec<_> = self.data.locations.iter().map(|l| l.to_location()).collect();
        let locations =
            try_join_all(locations.iter().map(|l| self.repository.upsert_location(l))).await?;
        tracing::info!("Created {} locations", locations.len());

        tracing::info!("Creating vehicle categories");
        let categories: Vec<_> = self.data.categories.iter().map(|c| c.to_category()).collect();
        let categories =
            try_join_all(categories.iter().map(|c| self.repository.upsert_category(c))).await?;
        tracing::info!("Created {} vehicle categories", categories.len());

        tracing::info!("Creating sample vehicles");
        let vehicles: Vec<_> = self.data.vehicles.iter().map(|v| v.to_vehicle(now)).collect();
        let vehicles =
            try_join_all(vehicles.iter().map(|v| self.repository.create_vehicle(v))).await?;
        tracing::info!("Created {} vehicles", vehicles.len());

        tracing::info!("Creating admin user");
        let password_hash = bcrypt::hash(&self.data.admin.password, self.bcrypt_cost)?;
        let admin = self
            .repository
            .upsert_admin(&self.data.admin.to_admin(password_hash))
            .await?;
        tracing::info!(email = %admin.email, "Admin user ready");

        let customer_id = match &self.data.customer {
            Some(seed) => {
                tracing::info!("Creating sample customer");
                let customer = self.repository.create_customer(&seed.to_customer(now)?).await?;
                tracing::info!(
                    phone = %sf_shared::utils::phone::mask_phone_number(&customer.phone),
                    "Created sample customer"
                );
                Some(customer.id)
            }
            None => None,
        };

        Ok(SeedReport {
            locations: locations.len(),
            categories: categories.len(),
            vehicles: vehicles.len(),
            admin_email: admin.email,
            customer_id,
        })
    }
}
