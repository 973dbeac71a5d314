//! Booking creation and administration inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sf_shared::errors::{AppError, AppResult};
use sf_shared::types::DateRange;
use sf_shared::utils::date::parse_date;
use uuid::Uuid;

use super::customer_input::CustomerInput;
use crate::domain::entities::{BookingType, PaymentMethod};
use crate::services::pricing::is_date_range_valid;

/// Who a booking is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerRef {
    Existing(Uuid),
    Inline(CustomerInput),
}

fn customer_ref(customer_id: Option<Uuid>, customer: Option<&CustomerInput>) -> AppResult<CustomerRef> {
    match (customer_id, customer) {
        (Some(id), _) => Ok(CustomerRef::Existing(id)),
        (None, Some(details)) => Ok(CustomerRef::Inline(details.clone())),
        (None, None) => Err(AppError::validation(
            "Either customerId or customer details are required",
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleBookingInput {
    /// Takes precedence over inline `customer`
    #[serde(default)]
    pub customer_id: Option<Uuid>,
    #[serde(default)]
    pub customer: Option<CustomerInput>,
    pub vehicle_id: Uuid,
    pub pickup_date: String,
    pub dropoff_date: String,
    pub pickup_location_id: String,
    pub dropoff_location_id: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl CreateVehicleBookingInput {
    pub fn customer_ref(&self) -> AppResult<CustomerRef> {
        customer_ref(self.customer_id, self.customer.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaxiBookingInput {
    #[serde(default)]
    pub customer_id: Option<Uuid>,
    #[serde(default)]
    pub customer: Option<CustomerInput>,
    pub pickup_location_id: String,
    pub pickup_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub dropoff_location_id: String,
    pub dropoff_address: String,
    pub dropoff_lat: f64,
    pub dropoff_lng: f64,
    pub category_id: String,
    pub pickup_date_time: String,
    pub passengers: u32,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl CreateTaxiBookingInput {
    pub fn customer_ref(&self) -> AppResult<CustomerRef> {
        customer_ref(self.customer_id, self.customer.as_ref())
    }
}

/// Rental availability search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAvailabilityQuery {
    pub pickup_date: String,
    pub dropoff_date: String,
    pub location_id: String,
}

impl VehicleAvailabilityQuery {
    /// Parsed rental window; must start in the future and end after it starts
    pub fn date_range(&self, now: DateTime<Utc>) -> AppResult<DateRange> {
        let start = parse_date(&self.pickup_date)?;
        let end = parse_date(&self.dropoff_date)?;
        if !is_date_range_valid(start, end, now) {
            return Err(AppError::validation(
                "Pickup date must be in the future and before the drop-off date",
            ));
        }
        Ok(DateRange::new(start, end))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBookingInput {
    pub booking_id: Uuid,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    #[serde(default)]
    pub notes: Option<String>,
}
