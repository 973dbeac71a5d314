use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::{BookingStatus, BookingSummary, BookingType};
use crate::services::dashboard::build_dashboard_stats;

// Friday 16 Oct 2026, 15:00 in Nairobi
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

fn summary(kind: BookingType, amount: i64, status: BookingStatus, created_at: DateTime<Utc>) -> BookingSummary {
    BookingSummary {
        id: Uuid::new_v4(),
        booking_type: kind,
        booking_number: format!("{}-00000000-TEST", kind.prefix()),
        customer_name: "John Doe".to_string(),
        customer_email: "john.doe@example.com".to_string(),
        amount: Decimal::from(amount),
        status,
        created_at,
    }
}

#[test]
fn test_period_boundaries() {
    let bookings = vec![
        summary(BookingType::Vehicle, 3480, BookingStatus::Confirmed, now() - Duration::hours(1)),
        // Monday of the same week
        summary(BookingType::Taxi, 2900, BookingStatus::Pending, now() - Duration::days(4)),
        // Earlier in October
        summary(BookingType::Vehicle, 1000, BookingStatus::Completed, now() - Duration::days(10)),
        // September
        summary(BookingType::Taxi, 500, BookingStatus::Completed, now() - Duration::days(40)),
    ];

    let stats = build_dashboard_stats(&bookings, now(), 10);

    assert_eq!(stats.today.vehicle_bookings, 1);
    assert_eq!(stats.today.taxi_bookings, 0);
    assert_eq!(stats.today.total_revenue, Decimal::from(3480));

    assert_eq!(stats.this_week.taxi_bookings, 1);
    assert_eq!(stats.this_week.total_revenue, Decimal::from(6380));

    assert_eq!(stats.this_month.vehicle_bookings, 2);
    assert_eq!(stats.this_month.total_revenue, Decimal::from(7380));

    assert_eq!(stats.pending.taxi_bookings, 1);
    assert_eq!(stats.pending.vehicle_bookings, 0);
}

#[test]
fn test_local_midnight_starts_the_day() {
    // 21:30 UTC yesterday is 00:30 today in Nairobi
    let early = Utc.with_ymd_and_hms(2026, 10, 15, 21, 30, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2026, 10, 15, 20, 30, 0).unwrap();
    let bookings = vec![
        summary(BookingType::Taxi, 100, BookingStatus::Completed, early),
        summary(BookingType::Taxi, 100, BookingStatus::Completed, late),
    ];

    let stats = build_dashboard_stats(&bookings, now(), 10);
    assert_eq!(stats.today.taxi_bookings, 1);
}

#[test]
fn test_cancelled_bookings_earn_nothing() {
    let bookings = vec![
        summary(BookingType::Vehicle, 3480, BookingStatus::Cancelled, now()),
        summary(BookingType::Vehicle, 100, BookingStatus::Confirmed, now()),
    ];

    let stats = build_dashboard_stats(&bookings, now(), 10);
    assert_eq!(stats.today.vehicle_bookings, 2);
    assert_eq!(stats.today.total_revenue, Decimal::from(100));
}

#[test]
fn test_recent_bookings_newest_first() {
    let bookings: Vec<_> = (0..5)
        .map(|i| summary(BookingType::Taxi, i, BookingStatus::Pending, now() - Duration::minutes(i)))
        .collect();

    let stats = build_dashboard_stats(&bookings, now(), 3);
    let amounts: Vec<_> = stats.recent_bookings.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![Decimal::from(0), Decimal::from(1), Decimal::from(2)]);
}
