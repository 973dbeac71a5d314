//! Unit tests for the mock seed repository

use chrono::Utc;

use crate::domain::entities::Location;
use crate::errors::StorageErrorCode;
use crate::repositories::seed::{MockSeedRepository, SeedRepository};
use crate::services::seed::SeedData;

#[tokio::test]
async fn test_upsert_location_keeps_existing_row() {
    let repo = MockSeedRepository::new();
    let original = Location::new("nairobi-loc", "Nairobi", "Nairobi", "CBD", -1.28, 36.81);
    repo.upsert_location(&original).await.unwrap();

    let renamed = Location {
        name: "Renamed".to_string(),
        ..original.clone()
    };
    let stored = repo.upsert_location(&renamed).await.unwrap();

    assert_eq!(stored.name, "Nairobi");
    assert_eq!(repo.locations().await.len(), 1);
}

#[tokio::test]
async fn test_create_vehicle_requires_location() {
    let repo = MockSeedRepository::new();
    let vehicle = SeedData::builtin().vehicles[0].to_vehicle(Utc::now());

    let error = repo.create_vehicle(&vehicle).await.unwrap_err();
    assert_eq!(error.storage_code(), Some(StorageErrorCode::ForeignKeyViolation));
}

#[tokio::test]
async fn test_create_vehicle_rejects_duplicate_registration() {
    let repo = MockSeedRepository::new();
    let data = SeedData::builtin();
    repo.upsert_location(&data.locations[0].to_location()).await.unwrap();

    let now = Utc::now();
    repo.create_vehicle(&data.vehicles[0].to_vehicle(now)).await.unwrap();
    let error = repo
        .create_vehicle(&data.vehicles[0].to_vehicle(now))
        .await
        .unwrap_err();

    assert_eq!(error.storage_code(), Some(StorageErrorCode::UniqueViolation));
    assert_eq!(repo.vehicles().await.len(), 1);
}

#[tokio::test]
async fn test_create_customer_rejects_duplicate_email() {
    let repo = MockSeedRepository::new();
    let seed = SeedData::builtin().customer.unwrap();
    let now = Utc::now();

    repo.create_customer(&seed.to_customer(now).unwrap()).await.unwrap();
    let error = repo
        .create_customer(&seed.to_customer(now).unwrap())
        .await
        .unwrap_err();

    assert_eq!(error.storage_code(), Some(StorageErrorCode::UniqueViolation));
}
