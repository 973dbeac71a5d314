//! Quote request and response bodies

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sf_core::domain::value_objects::TaxiPriceCalculation;
use validator::{Validate, ValidationError};

/// Rental quote request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQuoteRequest {
    #[validate(custom(function = "validate_positive_amount"))]
    pub price_per_day: Decimal,

    #[validate(length(min = 1, message = "Pickup date is required"))]
    pub pickup_date: String,

    #[validate(length(min = 1, message = "Drop-off date is required"))]
    pub dropoff_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQuoteResponse {
    /// ISO 8601, UTC
    pub pickup_date: String,
    pub dropoff_date: String,
    pub number_of_days: i64,
    pub price_per_day: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
    pub currency: String,
    /// e.g. `Ksh 3,480`
    pub formatted_total: String,
}

/// Taxi fare request against one reference category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaxiQuoteRequest {
    #[validate(length(min = 1, max = 64, message = "Category is required"))]
    pub category_id: String,

    /// Kilometres
    #[validate(custom(function = "validate_non_negative_distance"))]
    pub distance: Decimal,

    #[validate(range(min = 1, max = 50, message = "Passengers must be between 1 and 50"))]
    pub passengers: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiQuoteResponse {
    #[serde(flatten)]
    pub quote: TaxiPriceCalculation,
    pub currency: String,
    pub formatted_total: String,
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        Ok(())
    } else {
        Err(validation_error("positive", "Price per day must be greater than zero"))
    }
}

fn validate_non_negative_distance(distance: &Decimal) -> Result<(), ValidationError> {
    if distance.is_sign_negative() && !distance.is_zero() {
        Err(validation_error("non_negative", "Distance cannot be negative"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_vehicle_quote_request_rejects_zero_price() {
        let request = VehicleQuoteRequest {
            price_per_day: Decimal::ZERO,
            pickup_date: "2030-01-01".to_string(),
            dropoff_date: "2030-01-04".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price_per_day"));
    }

    #[test]
    fn test_taxi_quote_request_validation() {
        let valid = TaxiQuoteRequest {
            category_id: "sedan".to_string(),
            distance: Decimal::from_str("12.5").unwrap(),
            passengers: Some(3),
        };
        assert!(valid.validate().is_ok());

        let invalid = TaxiQuoteRequest {
            category_id: String::new(),
            distance: Decimal::from(-1),
            passengers: Some(0),
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let request: VehicleQuoteRequest = serde_json::from_value(serde_json::json!({
            "pricePerDay": 1000,
            "pickupDate": "2030-01-01",
            "dropoffDate": "2030-01-04"
        }))
        .unwrap();
        assert_eq!(request.price_per_day, Decimal::from(1000));
    }
}
