//! Pricing and pagination defaults

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::parse_env_or;
use crate::utils::currency::DEFAULT_CURRENCY;

/// Kenyan VAT, 16%
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(16, 0, 0, false, 2);

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Tax and currency used for quotes and bookings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PricingConfig {
    pub tax_rate: Decimal,
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PricingConfig {
    /// Read `TAX_RATE` and `CURRENCY`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tax_rate: parse_env_or("TAX_RATE", defaults.tax_rate),
            currency: std::env::var("CURRENCY").unwrap_or(defaults.currency),
        }
    }
}

/// Bounds for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationConfig {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: MAX_PAGE_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// Read `PAGINATION_DEFAULT_LIMIT` and `PAGINATION_MAX_LIMIT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_limit: parse_env_or("PAGINATION_DEFAULT_LIMIT", defaults.default_limit),
            max_limit: parse_env_or("PAGINATION_MAX_LIMIT", defaults.max_limit),
        }
    }
}
