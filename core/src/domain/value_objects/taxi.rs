//! Taxi routing and fare values.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sf_shared::errors::{AppError, AppResult};
use sf_shared::utils::validation::ValidationErrors;

use crate::domain::entities::VehicleCategory;
use crate::services::pricing::{calculate_taxi_price, round_money};

/// Pickup and drop-off coordinates for a route lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiRouteCalculationInput {
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub dropoff_lat: f64,
    pub dropoff_lng: f64,
}

impl TaxiRouteCalculationInput {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (field, value) in [("pickupLat", self.pickup_lat), ("dropoffLat", self.dropoff_lat)] {
            if !(-90.0..=90.0).contains(&value) {
                errors.add_error(field, "Latitude must be between -90 and 90");
            }
        }
        for (field, value) in [("pickupLng", self.pickup_lng), ("dropoffLng", self.dropoff_lng)] {
            if !(-180.0..=180.0).contains(&value) {
                errors.add_error(field, "Longitude must be between -180 and 180");
            }
        }
        errors
    }
}

/// Route length and travel time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiRouteResult {
    /// Kilometres, 2 decimal places
    pub distance: Decimal,
    /// Whole minutes, rounded up
    pub duration: u32,
}

impl TaxiRouteResult {
    /// Convert a directions response (metres, seconds)
    pub fn from_directions(meters: f64, seconds: f64) -> AppResult<Self> {
        if !meters.is_finite() || !seconds.is_finite() || meters < 0.0 || seconds < 0.0 {
            return Err(AppError::bad_request("Invalid route from directions provider"));
        }
        let meters = Decimal::from_f64(meters)
            .ok_or_else(|| AppError::bad_request("Route distance out of range"))?;
        let minutes = (seconds / 60.0).ceil();
        if minutes > f64::from(u32::MAX) {
            return Err(AppError::bad_request("Route duration out of range"));
        }

        Ok(Self {
            distance: round_money(meters / Decimal::ONE_THOUSAND),
            duration: minutes as u32,
        })
    }
}

/// A fare quote for one category over one distance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiPriceCalculation {
    pub category_id: String,
    pub category_name: String,
    pub seats: u32,
    pub base_price: Decimal,
    pub price_per_km: Decimal,
    pub distance: Decimal,
    pub calculated_price: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
}

impl TaxiPriceCalculation {
    pub fn for_category(
        category: &VehicleCategory,
        distance: Decimal,
        tax_rate: Decimal,
    ) -> AppResult<Self> {
        let price = calculate_taxi_price(category.base_price, category.price_per_km, distance, tax_rate)?;
        Ok(Self {
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            seats: category.seats,
            base_price: category.base_price,
            price_per_km: category.price_per_km,
            distance,
            calculated_price: price.calculated_price,
            tax: price.tax,
            total_amount: price.total_amount,
        })
    }
}
