//! Taxi vehicle tiers and their fare parameters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sf_shared::utils::text::slugify;

/// A taxi tier (Sedan, SUV, ...) with base and per-kilometre pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCategory {
    /// Slug of the name
    pub id: String,
    /// Unique across categories
    pub name: String,
    pub description: Option<String>,
    pub seats: u32,
    pub base_price: Decimal,
    pub price_per_km: Decimal,
    pub image: Option<String>,
    pub is_active: bool,
}

impl VehicleCategory {
    pub fn new(name: impl Into<String>, seats: u32, base_price: Decimal, price_per_km: Decimal) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            description: None,
            seats,
            base_price,
            price_per_km,
            image: None,
            is_active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Whether a party of `passengers` fits
    pub fn can_carry(&self, passengers: u32) -> bool {
        passengers > 0 && passengers <= self.seats
    }
}
