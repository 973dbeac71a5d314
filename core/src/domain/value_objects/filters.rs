//! Admin booking list filters.

use serde::{Deserialize, Serialize};
use sf_shared::errors::AppResult;
use sf_shared::types::PaginationParams;
use sf_shared::utils::date::parse_date;

use crate::domain::entities::{BookingStatus, BookingSummary, BookingType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilters {
    #[serde(default)]
    pub status: Option<BookingStatus>,
    #[serde(default, rename = "type")]
    pub booking_type: Option<BookingType>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Matches booking number, customer name or email
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl BookingFilters {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.limit)
    }

    /// Keep the summaries matching every set filter, in order
    ///
    /// Dates bound `created_at` inclusively.
    pub fn apply<'a>(&self, bookings: &'a [BookingSummary]) -> AppResult<Vec<&'a BookingSummary>> {
        let start = self.start_date.as_deref().map(parse_date).transpose()?;
        let end = self.end_date.as_deref().map(parse_date).transpose()?;
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        Ok(bookings
            .iter()
            .filter(|b| self.status.map_or(true, |status| b.status == status))
            .filter(|b| self.booking_type.map_or(true, |kind| b.booking_type == kind))
            .filter(|b| start.map_or(true, |start| b.created_at >= start))
            .filter(|b| end.map_or(true, |end| b.created_at <= end))
            .filter(|b| {
                needle.as_deref().map_or(true, |needle| {
                    b.booking_number.to_lowercase().contains(needle)
                        || b.customer_name.to_lowercase().contains(needle)
                        || b.customer_email.to_lowercase().contains(needle)
                })
            })
            .collect())
    }
}
