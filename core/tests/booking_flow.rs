//! Seed reference data, then price, confirm and report a rental

use std::sync::Arc;

use chrono::{Duration, Utc};
use sf_core::domain::entities::{BookingStatus, BookingType, PaymentMethod, VehicleBooking};
use sf_core::domain::value_objects::CreateVehicleBookingInput;
use sf_core::repositories::MockSeedRepository;
use sf_core::services::pricing::calculate_vehicle_booking_price;
use sf_core::services::{build_dashboard_stats, SeedData, SeedService, DEFAULT_RECENT_LIMIT};
use sf_shared::config::DEFAULT_TAX_RATE;

#[tokio::test]
async fn test_seeded_vehicle_booking_reaches_dashboard() {
    let repo = Arc::new(MockSeedRepository::new());
    let report = SeedService::new(Arc::clone(&repo), SeedData::builtin())
        .with_bcrypt_cost(4)
        .run()
        .await
        .unwrap();

    let customer = repo
        .customers()
        .await
        .into_iter()
        .find(|c| Some(c.id) == report.customer_id)
        .unwrap();
    let vehicle = repo.vehicles().await.into_iter().find(|v| v.is_available()).unwrap();

    let now = Utc::now();
    let pickup = now + Duration::days(2);
    let input = CreateVehicleBookingInput {
        customer_id: Some(customer.id),
        customer: None,
        vehicle_id: vehicle.id,
        pickup_date: pickup.to_rfc3339(),
        dropoff_date: (pickup + Duration::days(4)).to_rfc3339(),
        pickup_location_id: vehicle.location_id.clone(),
        dropoff_location_id: "mombasa-loc".to_string(),
        payment_method: PaymentMethod::Mpesa,
        special_requests: None,
    };

    let mut booking =
        VehicleBooking::draft(&input, customer.id, &vehicle, DEFAULT_TAX_RATE, now).unwrap();
    let expected = calculate_vehicle_booking_price(vehicle.price_per_day, 4, DEFAULT_TAX_RATE).unwrap();
    assert_eq!(booking.number_of_days, 4);
    assert_eq!(booking.total_amount, expected.total_amount);
    assert_eq!(
        BookingType::from_booking_number(&booking.booking_number),
        Some(BookingType::Vehicle)
    );

    booking.confirm(Some("Paid via M-Pesa".to_string()), now).unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);

    let stats = build_dashboard_stats(&[booking.summary(&customer)], now, DEFAULT_RECENT_LIMIT);
    assert_eq!(stats.today.vehicle_bookings, 1);
    assert_eq!(stats.today.total_revenue, expected.total_amount);
    assert_eq!(stats.pending.vehicle_bookings, 0);
    assert_eq!(stats.recent_bookings.len(), 1);
    assert_eq!(stats.recent_bookings[0].customer_name, "John Doe");
}

#[tokio::test]
async fn test_crate_root_reexports_run_the_seed() {
    let repo = Arc::new(sf_core::MockSeedRepository::new());
    let report: sf_core::SeedReport =
        sf_core::SeedService::new(Arc::clone(&repo), sf_core::SeedData::builtin())
            .with_bcrypt_cost(4)
            .run()
            .await
            .unwrap();

    assert_eq!(report.locations, repo.locations().await.len());
    assert_eq!(report.vehicles, repo.vehicles().await.len());
    assert!(repo.admin(&report.admin_email).await.is_some());
}
