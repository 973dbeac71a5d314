use chrono::{TimeZone, Utc};

use crate::domain::entities::Customer;
use crate::domain::value_objects::CustomerInput;

fn input() -> CustomerInput {
    CustomerInput {
        first_name: " Jane ".to_string(),
        last_name: "Wanjiru".to_string(),
        email: "jane@example.com".to_string(),
        phone: "0712 345 678".to_string(),
        alternate_phone: Some("0112 345 678".to_string()),
        license_expiry: Some("2027-06-30".to_string()),
        driving_license: Some("DL987".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_from_input_sanitizes_phones() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    let customer = Customer::from_input(&input(), now).unwrap();

    assert_eq!(customer.first_name, "Jane");
    assert_eq!(customer.phone, "+254712345678");
    assert_eq!(customer.alternate_phone.as_deref(), Some("+254112345678"));
    assert_eq!(customer.full_name(), "Jane Wanjiru");
    assert!(customer.has_valid_license(now));
    assert_eq!(customer.created_at, now);
}

#[test]
fn test_from_input_rejects_bad_email() {
    let mut bad = input();
    bad.email = "not an email".to_string();

    let error = Customer::from_input(&bad, Utc::now()).unwrap_err();
    assert_eq!(error.status, 422);
    assert!(error.message.contains("email"));
}

#[test]
fn test_license_expiry_in_past_is_invalid() {
    let customer = Customer::from_input(&input(), Utc::now()).unwrap();
    let later = Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0).unwrap();
    assert!(!customer.has_valid_license(later));
}
