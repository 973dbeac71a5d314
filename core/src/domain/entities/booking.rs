//! Vehicle rental and taxi booking entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sf_shared::errors::{AppError, AppResult};
use sf_shared::utils::date::{is_date_in_past, parse_date};
use std::fmt;
use uuid::Uuid;

use super::customer::Customer;
use super::vehicle::Vehicle;
use super::vehicle_category::VehicleCategory;
use crate::domain::value_objects::{
    CreateTaxiBookingInput, CreateVehicleBookingInput, TaxiPriceCalculation, TaxiRouteResult,
};
use crate::services::booking_number::generate_booking_number;
use crate::services::pricing::{
    calculate_number_of_days, calculate_vehicle_booking_price, is_date_range_valid,
};

/// Kind of booking; also determines the booking-number prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Vehicle,
    Taxi,
}

impl BookingType {
    pub fn prefix(&self) -> &'static str {
        match self {
            BookingType::Vehicle => "VR",
            BookingType::Taxi => "TX",
        }
    }

    /// Recover the type from a booking number's prefix
    pub fn from_booking_number(booking_number: &str) -> Option<Self> {
        match booking_number.split('-').next()? {
            "VR" => Some(BookingType::Vehicle),
            "TX" => Some(BookingType::Taxi),
            _ => None,
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingType::Vehicle => write!(f, "vehicle"),
            BookingType::Taxi => write!(f, "taxi"),
        }
    }
}

impl std::str::FromStr for BookingType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vehicle" => Ok(BookingType::Vehicle),
            "taxi" => Ok(BookingType::Taxi),
            _ => Err(AppError::validation(format!("Invalid booking type: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Cancelled bookings earn nothing
    pub fn counts_toward_revenue(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::InProgress => "IN_PROGRESS",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Mpesa,
    Card,
    Cash,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
    Refunded,
}

/// Compact row used by dashboards and booking lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub booking_type: BookingType,
    pub booking_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Multi-day vehicle rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleBooking {
    pub id: Uuid,
    pub booking_number: String,
    pub customer_id: Uuid,
    pub vehicle_id: Uuid,
    pub pickup_location_id: String,
    pub dropoff_location_id: String,
    pub pickup_date: DateTime<Utc>,
    pub dropoff_date: DateTime<Utc>,
    pub number_of_days: i64,
    pub price_per_day: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
    pub admin_notes: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleBooking {
    /// Price a rental request and open it in `Pending`
    pub fn draft(
        input: &CreateVehicleBookingInput,
        customer_id: Uuid,
        vehicle: &Vehicle,
        tax_rate: Decimal,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        if input.vehicle_id != vehicle.id {
            return Err(AppError::bad_request("Vehicle does not match booking request"));
        }
        if !vehicle.is_available() {
            return Err(AppError::conflict("Vehicle is not available"));
        }

        let pickup_date = parse_date(&input.pickup_date)?;
        let dropoff_date = parse_date(&input.dropoff_date)?;
        if !is_date_range_valid(pickup_date, dropoff_date, now) {
            return Err(AppError::validation(
                "Pickup date must be in the future and before the drop-off date",
            ));
        }

        let number_of_days = calculate_number_of_days(pickup_date, dropoff_date);
        let price = calculate_vehicle_booking_price(vehicle.price_per_day, number_of_days, tax_rate)?;

        Ok(Self {
            id: Uuid::new_v4(),
            booking_number: generate_booking_number(BookingType::Vehicle),
            customer_id,
            vehicle_id: vehicle.id,
            pickup_location_id: input.pickup_location_id.clone(),
            dropoff_location_id: input.dropoff_location_id.clone(),
            pickup_date,
            dropoff_date,
            number_of_days,
            price_per_day: vehicle.price_per_day,
            subtotal: price.subtotal,
            tax: price.tax,
            total_amount: price.total_amount,
            status: BookingStatus::Pending,
            payment_method: input.payment_method,
            payment_status: PaymentStatus::Pending,
            special_requests: input.special_requests.clone(),
            admin_notes: None,
            confirmed_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn confirm(&mut self, notes: Option<String>, now: DateTime<Utc>) -> AppResult<()> {
        transition_to_confirmed(&mut self.status, self.booking_number.as_str())?;
        self.admin_notes = notes.or(self.admin_notes.take());
        self.confirmed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    pub fn cancel(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        transition_to_cancelled(&mut self.status, self.booking_number.as_str())?;
        self.updated_at = now;
        Ok(())
    }

    pub fn summary(&self, customer: &Customer) -> BookingSummary {
        BookingSummary {
            id: self.id,
            booking_type: BookingType::Vehicle,
            booking_number: self.booking_number.clone(),
            customer_name: customer.full_name(),
            customer_email: customer.email.clone(),
            amount: self.total_amount,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

/// Single taxi trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiBooking {
    pub id: Uuid,
    pub booking_number: String,
    pub customer_id: Uuid,
    pub category_id: String,
    pub pickup_location_id: String,
    pub pickup_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub dropoff_location_id: String,
    pub dropoff_address: String,
    pub dropoff_lat: f64,
    pub dropoff_lng: f64,
    pub pickup_date_time: DateTime<Utc>,
    pub passengers: u32,

    /// Kilometres
    pub distance: Decimal,

    /// Minutes
    pub duration: u32,
    pub base_price: Decimal,
    pub price_per_km: Decimal,
    pub calculated_price: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
    pub admin_notes: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaxiBooking {
    /// Price a trip over a computed route and open it in `Pending`
    pub fn draft(
        input: &CreateTaxiBookingInput,
        customer_id: Uuid,
        category: &VehicleCategory,
        route: &TaxiRouteResult,
        tax_rate: Decimal,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        if input.category_id != category.id {
            return Err(AppError::bad_request("Category does not match booking request"));
        }
        if !category.is_active {
            return Err(AppError::not_found("Vehicle category"));
        }
        if !category.can_carry(input.passengers) {
            return Err(AppError::validation(format!(
                "{} seats between 1 and {} passengers",
                category.name, category.seats
            )));
        }

        let pickup_date_time = parse_date(&input.pickup_date_time)?;
        if is_date_in_past(pickup_date_time, now) {
            return Err(AppError::validation("Pickup time must be in the future"));
        }

        let price = TaxiPriceCalculation::for_category(category, route.distance, tax_rate)?;

        Ok(Self {
            id: Uuid::new_v4(),
            booking_number: generate_booking_number(BookingType::Taxi),
            customer_id,
            category_id: category.id.clone(),
            pickup_location_id: input.pickup_location_id.clone(),
            pickup_address: input.pickup_address.clone(),
            pickup_lat: input.pickup_lat,
            pickup_lng: input.pickup_lng,
            dropoff_location_id: input.dropoff_location_id.clone(),
            dropoff_address: input.dropoff_address.clone(),
            dropoff_lat: input.dropoff_lat,
            dropoff_lng: input.dropoff_lng,
            pickup_date_time,
            passengers: input.passengers,
            distance: route.distance,
            duration: route.duration,
            base_price: price.base_price,
            price_per_km: price.price_per_km,
            calculated_price: price.calculated_price,
            tax: price.tax,
            total_amount: price.total_amount,
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            special_requests: input.special_requests.clone(),
            admin_notes: None,
            confirmed_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn confirm(&mut self, notes: Option<String>, now: DateTime<Utc>) -> AppResult<()> {
        transition_to_confirmed(&mut self.status, self.booking_number.as_str())?;
        self.admin_notes = notes.or(self.admin_notes.take());
        self.confirmed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    pub fn cancel(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        transition_to_cancelled(&mut self.status, self.booking_number.as_str())?;
        self.updated_at = now;
        Ok(())
    }

    pub fn summary(&self, customer: &Customer) -> BookingSummary {
        BookingSummary {
            id: self.id,
            booking_type: BookingType::Taxi,
            booking_number: self.booking_number.clone(),
            customer_name: customer.full_name(),
            customer_email: customer.email.clone(),
            amount: self.total_amount,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

fn transition_to_confirmed(status: &mut BookingStatus, booking_number: &str) -> AppResult<()> {
    if *status != BookingStatus::Pending {
        return Err(AppError::conflict(format!(
            "Booking {} cannot be confirmed while {}",
            booking_number, status
        )));
    }
    *status = BookingStatus::Confirmed;
    Ok(())
}

fn transition_to_cancelled(status: &mut BookingStatus, booking_number: &str) -> AppResult<()> {
    if matches!(status, BookingStatus::Completed | BookingStatus::Cancelled) {
        return Err(AppError::conflict(format!(
            "Booking {} cannot be cancelled while {}",
            booking_number, status
        )));
    }
    *status = BookingStatus::Cancelled;
    Ok(())
}

