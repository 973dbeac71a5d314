//! Admin dashboard aggregates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::BookingSummary;

/// Bookings and revenue over one period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub vehicle_bookings: u64,
    pub taxi_bookings: u64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingStats {
    pub vehicle_bookings: u64,
    pub taxi_bookings: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub today: PeriodStats,
    pub this_week: PeriodStats,
    pub this_month: PeriodStats,
    pub pending: PendingStats,
    pub recent_bookings: Vec<BookingSummary>,
}
