use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::{BookingStatus, BookingSummary, BookingType};
use crate::domain::value_objects::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

#[test]
fn test_customer_input_collects_all_errors() {
    let input = CustomerInput {
        first_name: "  ".to_string(),
        email: "bad".to_string(),
        phone: "12345".to_string(),
        license_expiry: Some("soon".to_string()),
        ..Default::default()
    };

    let fields: Vec<String> = input
        .validate()
        .into_errors()
        .into_iter()
        .map(|e| e.field)
        .collect();
    assert_eq!(fields, vec!["firstName", "lastName", "email", "phone", "licenseExpiry"]);
}

#[test]
fn test_customer_ref_prefers_existing_id() {
    let id = Uuid::new_v4();
    let json = serde_json::json!({
        "customerId": id,
        "customer": { "firstName": "A", "lastName": "B", "email": "a@b.co", "phone": "0712345678" },
        "vehicleId": Uuid::new_v4(),
        "pickupDate": "2026-11-01",
        "dropoffDate": "2026-11-03",
        "pickupLocationId": "nairobi-loc",
        "dropoffLocationId": "kisumu-loc",
        "paymentMethod": "MPESA"
    });
    let input: CreateVehicleBookingInput = serde_json::from_value(json).unwrap();
    assert_eq!(input.customer_ref().unwrap(), CustomerRef::Existing(id));
}

#[test]
fn test_customer_ref_requires_some_customer() {
    let json = serde_json::json!({
        "pickupLocationId": "nairobi-loc",
        "pickupAddress": "CBD",
        "pickupLat": -1.28,
        "pickupLng": 36.81,
        "dropoffLocationId": "nairobi-loc",
        "dropoffAddress": "Westlands",
        "dropoffLat": -1.26,
        "dropoffLng": 36.80,
        "categoryId": "sedan",
        "pickupDateTime": "2026-10-17T09:00",
        "passengers": 2
    });
    let input: CreateTaxiBookingInput = serde_json::from_value(json).unwrap();
    let error = input.customer_ref().unwrap_err();
    assert_eq!(error.status, 422);
}

#[test]
fn test_availability_query_range() {
    let query = VehicleAvailabilityQuery {
        pickup_date: "2026-11-01".to_string(),
        dropoff_date: "2026-11-05".to_string(),
        location_id: "nairobi-loc".to_string(),
    };
    let range = query.date_range(now()).unwrap();
    assert_eq!(range.duration(), Duration::days(4));

    let backwards = VehicleAvailabilityQuery {
        pickup_date: "2026-11-05".to_string(),
        dropoff_date: "2026-11-01".to_string(),
        ..query
    };
    assert!(backwards.date_range(now()).is_err());
}

#[test]
fn test_confirm_input_uses_type_key() {
    let input: ConfirmBookingInput = serde_json::from_value(serde_json::json!({
        "bookingId": Uuid::new_v4(),
        "type": "taxi"
    }))
    .unwrap();
    assert_eq!(input.booking_type, BookingType::Taxi);
    assert!(input.notes.is_none());
}

fn summary(number: &str, name: &str, status: BookingStatus, created_at: DateTime<Utc>) -> BookingSummary {
    BookingSummary {
        id: Uuid::new_v4(),
        booking_type: BookingType::from_booking_number(number).unwrap(),
        booking_number: number.to_string(),
        customer_name: name.to_string(),
        customer_email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        amount: Decimal::from(100),
        status,
        created_at,
    }
}

#[test]
fn test_booking_filters_apply() {
    let bookings = vec![
        summary("VR-11111111-AAAA", "John Doe", BookingStatus::Pending, now()),
        summary("TX-22222222-BBBB", "Jane Wanjiru", BookingStatus::Pending, now() - Duration::days(3)),
        summary("TX-33333333-CCCC", "John Otieno", BookingStatus::Cancelled, now()),
    ];

    let by_status = BookingFilters {
        status: Some(BookingStatus::Pending),
        ..Default::default()
    };
    assert_eq!(by_status.apply(&bookings).unwrap().len(), 2);

    let by_type_and_search = BookingFilters {
        booking_type: Some(BookingType::Taxi),
        search: Some(" JOHN ".to_string()),
        ..Default::default()
    };
    let matched = by_type_and_search.apply(&bookings).unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].booking_number, "TX-33333333-CCCC");

    let by_date = BookingFilters {
        start_date: Some("2026-10-15".to_string()),
        ..Default::default()
    };
    assert_eq!(by_date.apply(&bookings).unwrap().len(), 2);

    let bad_date = BookingFilters {
        end_date: Some("yesterday".to_string()),
        ..Default::default()
    };
    assert!(bad_date.apply(&bookings).is_err());
}

#[test]
fn test_booking_filters_pagination() {
    let filters: BookingFilters =
        serde_json::from_value(serde_json::json!({ "page": 2, "limit": 500, "type": "vehicle" })).unwrap();
    let page = filters.pagination().resolve(&Default::default());
    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 100);
    assert_eq!(page.skip, 100);
}
