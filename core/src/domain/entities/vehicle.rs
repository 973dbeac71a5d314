//! Rental fleet vehicles.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Operational state of a rental vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    #[default]
    Available,
    Booked,
    Maintenance,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

/// A vehicle available for multi-day rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,

    /// Display name, e.g. "Toyota Corolla 2022"
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,

    /// Plate number; unique across the fleet
    pub registration_no: String,
    pub color: String,
    pub seats: u32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub price_per_day: Decimal,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub description: Option<String>,
    pub status: VehicleStatus,

    /// Owning location
    pub location_id: String,

    /// Odometer reading in kilometres
    pub mileage: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    pub fn set_status(&mut self, status: VehicleStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
