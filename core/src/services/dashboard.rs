//! Dashboard aggregation over booking summaries.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc};

use crate::domain::entities::{BookingStatus, BookingSummary, BookingType};
use crate::domain::value_objects::{DashboardStats, PendingStats, PeriodStats};
use sf_shared::utils::date::east_africa;

/// Recent bookings listed by default
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Period starts are local (East Africa) midnights; weeks begin on Monday.
pub fn build_dashboard_stats(
    bookings: &[BookingSummary],
    now: DateTime<Utc>,
    recent_limit: usize,
) -> DashboardStats {
    let local = now.with_timezone(&east_africa());
    let today = local.date_naive();
    let start_of = |date: chrono::NaiveDate| -> DateTime<Utc> {
        east_africa()
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .single()
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or(now)
    };

    let day_start = start_of(today);
    let week_start =
        start_of(today - Duration::days(i64::from(today.weekday().num_days_from_monday())));
    let month_start = start_of(today.with_day(1).unwrap_or(today));

    let mut pending = PendingStats::default();
    for booking in bookings.iter().filter(|b| b.status == BookingStatus::Pending) {
        match booking.booking_type {
            BookingType::Vehicle => pending.vehicle_bookings += 1,
            BookingType::Taxi => pending.taxi_bookings += 1,
        }
    }

    let mut recent_bookings = bookings.to_vec();
    recent_bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_bookings.truncate(recent_limit);

    DashboardStats {
        today: period_stats(bookings, day_start, now),
        this_week: period_stats(bookings, week_start, now),
        this_month: period_stats(bookings, month_start, now),
        pending,
        recent_bookings,
    }
}

fn period_stats(bookings: &[BookingSummary], from: DateTime<Utc>, to: DateTime<Utc>) -> PeriodStats {
    bookings
        .iter()
        .filter(|b| b.created_at >= from && b.created_at <= to)
        .fold(PeriodStats::default(), |mut stats, booking| {
            match booking.booking_type {
                BookingType::Vehicle => stats.vehicle_bookings += 1,
                BookingType::Taxi => stats.taxi_bookings += 1,
            }
            if booking.status.counts_toward_revenue() {
                stats.total_revenue += booking.amount;
            }
            stats
        })
}
