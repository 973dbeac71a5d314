//! Date formatting and parsing
//!
//! Human-readable output uses the East Africa locale: UTC+03:00, day-month-year
//! ordering and a 24-hour clock.

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone,
    Utc,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

const EAST_AFRICA_OFFSET_SECONDS: i32 = 3 * 3600;
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The fixed zone used for display (Africa/Nairobi has no DST)
pub fn east_africa() -> FixedOffset {
    FixedOffset::east_opt(EAST_AFRICA_OFFSET_SECONDS).unwrap_or(Utc.fix())
}

/// Output style for [`format_date`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `16 Oct 2026`
    #[default]
    Short,
    /// `16 October 2026 at 14:05`
    Long,
    /// `2026-10-16T11:05:00.000Z`
    Iso,
}

impl FromStr for DateFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(DateFormat::Short),
            "long" => Ok(DateFormat::Long),
            "iso" => Ok(DateFormat::Iso),
            _ => Err(AppError::validation(format!("Invalid date format style: {}", s))),
        }
    }
}

pub fn format_date(date: DateTime<Utc>, format: DateFormat) -> String {
    match format {
        DateFormat::Iso => date.to_rfc3339_opts(SecondsFormat::Millis, true),
        DateFormat::Short => date.with_timezone(&east_africa()).format("%-d %b %Y").to_string(),
        DateFormat::Long => date
            .with_timezone(&east_africa())
            .format("%-d %B %Y at %H:%M")
            .to_string(),
    }
}

/// Parse a date or date-time string
///
/// Accepts RFC 3339, RFC 2822, a local `YYYY-MM-DDTHH:MM[:SS[.fff]]`
/// (East Africa time) and a bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_date(input: &str) -> AppResult<DateTime<Utc>> {
    let value = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            if let Some(local) = east_africa().from_local_datetime(&naive).single() {
                return Ok(local.with_timezone(&Utc));
            }
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(AppError::validation(format!("Invalid date format: {}", input)))
}

/// Strictly before `now`
pub fn is_date_in_past(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date < now
}

pub fn add_days(date: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    date + Duration::days(days)
}

/// Whole days between two instants, rounding any partial day up
pub fn calculate_days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}
