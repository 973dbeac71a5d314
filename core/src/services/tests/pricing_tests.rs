//! Unit tests for fare arithmetic

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use sf_shared::config::DEFAULT_TAX_RATE;
use std::str::FromStr;

use crate::services::pricing::*;
use sf_shared::errors::ErrorKind;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

#[test]
fn test_vehicle_price_three_days() {
    let price = calculate_vehicle_booking_price(Decimal::from(1000), 3, DEFAULT_TAX_RATE).unwrap();
    assert_eq!(price.subtotal, dec("3000"));
    assert_eq!(price.tax, dec("480"));
    assert_eq!(price.total_amount, dec("3480"));
}

#[test]
fn test_taxi_price_ten_km() {
    let price =
        calculate_taxi_price(Decimal::from(2000), Decimal::from(50), Decimal::from(10), DEFAULT_TAX_RATE)
            .unwrap();
    assert_eq!(price.calculated_price, dec("2500"));
    assert_eq!(price.tax, dec("400"));
    assert_eq!(price.total_amount, dec("2900"));
}

#[test]
fn test_fields_are_rounded_independently() {
    // 1.0049 + 0.160784 = 1.165684; rounded fields sum to 1.16
    let price = calculate_taxi_price(Decimal::ZERO, dec("1.0049"), Decimal::ONE, DEFAULT_TAX_RATE).unwrap();
    assert_eq!(price.calculated_price, dec("1.00"));
    assert_eq!(price.tax, dec("0.16"));
    assert_eq!(price.total_amount, dec("1.17"));
    assert_ne!(price.calculated_price + price.tax, price.total_amount);
}

#[test]
fn test_round_money_half_away_from_zero() {
    assert_eq!(round_money(dec("2.345")), dec("2.35"));
    assert_eq!(round_money(dec("2.344")), dec("2.34"));
    assert_eq!(round_money(dec("-2.345")), dec("-2.35"));
    assert_eq!(round_money(dec("0.005")), dec("0.01"));
}

#[test]
fn test_custom_tax_rate() {
    let price = calculate_vehicle_booking_price(dec("3333.33"), 1, dec("0.08")).unwrap();
    assert_eq!(price.subtotal, dec("3333.33"));
    assert_eq!(price.tax, dec("266.67"));
    assert_eq!(price.total_amount, dec("3600.00"));
}

#[test]
fn test_number_of_days_rounds_partial_days_up() {
    let start = Utc.with_ymd_and_hms(2026, 11, 1, 10, 0, 0).unwrap();
    assert_eq!(calculate_number_of_days(start, start + Duration::days(2)), 2);
    assert_eq!(calculate_number_of_days(start, start + Duration::hours(49)), 3);
    assert_eq!(calculate_number_of_days(start + Duration::days(2), start), 2);
    assert_eq!(calculate_number_of_days(start, start), 0);
}

#[test]
fn test_date_range_validity() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    let tomorrow = now + Duration::days(1);

    assert!(is_date_range_valid(tomorrow, tomorrow + Duration::days(2), now));
    assert!(is_date_range_valid(now, tomorrow, now));
    assert!(!is_date_range_valid(tomorrow, tomorrow, now));
    assert!(!is_date_range_valid(tomorrow + Duration::days(1), tomorrow, now));
    assert!(!is_date_range_valid(now - Duration::hours(1), tomorrow, now));
}

#[test]
fn test_taxi_price_overflow_is_a_validation_error() {
    let distance = Decimal::MAX;
    let error = calculate_taxi_price(Decimal::from(2000), Decimal::from(50), distance, DEFAULT_TAX_RATE)
        .unwrap_err();
    assert!(error.is_kind(ErrorKind::Validation));
    assert_eq!(error.message, AMOUNT_OUT_OF_RANGE);
}

#[test]
fn test_vehicle_price_overflow_is_a_validation_error() {
    let error = calculate_vehicle_booking_price(Decimal::MAX, 3, DEFAULT_TAX_RATE).unwrap_err();
    assert_eq!(error.status, 422);
    assert_eq!(error.message, AMOUNT_OUT_OF_RANGE);
}
