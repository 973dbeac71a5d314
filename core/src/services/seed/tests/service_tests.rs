use std::sync::Arc;

use crate::errors::StorageErrorCode;
use crate::repositories::MockSeedRepository;
use crate::services::seed::{SeedData, SeedService};

const TEST_COST: u32 = 4;

fn service(repo: &Arc<MockSeedRepository>, data: SeedData) -> SeedService<MockSeedRepository> {
    SeedService::new(Arc::clone(repo), data).with_bcrypt_cost(TEST_COST)
}

#[tokio::test]
async fn test_run_seeds_every_group() {
    let repo = Arc::new(MockSeedRepository::new());
    let report = service(&repo, SeedData::builtin()).run().await.unwrap();

    assert_eq!(report.locations, 5);
    assert_eq!(report.categories, 4);
    assert_eq!(report.vehicles, 5);
    assert_eq!(report.admin_email, "admin@transport.com");
    assert!(report.customer_id.is_some());
    assert_eq!(repo.customers().await.len(), 1);
}

#[tokio::test]
async fn test_admin_password_is_hashed() {
    let repo = Arc::new(MockSeedRepository::new());
    service(&repo, SeedData::builtin()).run().await.unwrap();

    let admin = repo.admin("admin@transport.com").await.unwrap();
    assert_ne!(admin.password_hash, "admin123");
    assert!(bcrypt::verify("admin123", &admin.password_hash).unwrap());
    assert!(admin.is_super_admin());
}

#[tokio::test]
async fn test_rerun_fails_on_vehicle_insert() {
    let repo = Arc::new(MockSeedRepository::new());
    service(&repo, SeedData::builtin()).run().await.unwrap();

    let error = service(&repo, SeedData::builtin()).run().await.unwrap_err();
    assert_eq!(error.storage_code(), Some(StorageErrorCode::UniqueViolation));
    assert_eq!(repo.locations().await.len(), 5);
    assert_eq!(repo.categories().await.len(), 4);
}

#[tokio::test]
async fn test_vehicle_with_unknown_location_aborts_before_admin() {
    let repo = Arc::new(MockSeedRepository::new());
    let mut data = SeedData::builtin();
    data.vehicles[0].location_id = "atlantis-loc".to_string();

    let error = service(&repo, data).run().await.unwrap_err();
    assert_eq!(error.storage_code(), Some(StorageErrorCode::ForeignKeyViolation));
    assert!(repo.admin("admin@transport.com").await.is_none());
    assert!(repo.customers().await.is_empty());
}

#[tokio::test]
async fn test_run_without_customer() {
    let repo = Arc::new(MockSeedRepository::new());
    let mut data = SeedData::builtin();
    data.customer = None;

    let report = service(&repo, data).run().await.unwrap();
    assert_eq!(report.customer_id, None);
}
