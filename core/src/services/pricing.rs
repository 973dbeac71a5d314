//! Rental and taxi fare arithmetic.
//!
//! Every output field is rounded to cents on its own, half away from zero.
//! The total is formed from the unrounded subtotal and tax, so it can differ
//! by a cent from the sum of the rounded fields.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use sf_shared::errors::{AppError, AppResult};
use sf_shared::utils::date::calculate_days_between;

/// Message for amounts beyond the 96-bit `Decimal` range
pub const AMOUNT_OUT_OF_RANGE: &str = "Amount is too large to price";

fn out_of_range() -> AppError {
    AppError::validation(AMOUNT_OUT_OF_RANGE)
}

/// Round a monetary amount to 2 decimal places
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePriceBreakdown {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiPriceBreakdown {
    pub calculated_price: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
}

pub fn calculate_vehicle_booking_price(
    price_per_day: Decimal,
    number_of_days: i64,
    tax_rate: Decimal,
) -> AppResult<VehiclePriceBreakdown> {
    let subtotal = price_per_day
        .checked_mul(Decimal::from(number_of_days))
        .ok_or_else(out_of_range)?;
    let tax = subtotal.checked_mul(tax_rate).ok_or_else(out_of_range)?;
    let total_amount = subtotal.checked_add(tax).ok_or_else(out_of_range)?;

    Ok(VehiclePriceBreakdown {
        subtotal: round_money(subtotal),
        tax: round_money(tax),
        total_amount: round_money(total_amount),
    })
}

/// `distance` in kilometres; fails with a validation error on overflow
pub fn calculate_taxi_price(
    base_price: Decimal,
    price_per_km: Decimal,
    distance: Decimal,
    tax_rate: Decimal,
) -> AppResult<TaxiPriceBreakdown> {
    let calculated_price = price_per_km
        .checked_mul(distance)
        .and_then(|fare| base_price.checked_add(fare))
        .ok_or_else(out_of_range)?;
    let tax = calculated_price.checked_mul(tax_rate).ok_or_else(out_of_range)?;
    let total_amount = calculated_price.checked_add(tax).ok_or_else(out_of_range)?;

    Ok(TaxiPriceBreakdown {
        calculated_price: round_money(calculated_price),
        tax: round_money(tax),
        total_amount: round_money(total_amount),
    })
}

/// Rental days charged; any partial day counts as a full one
pub fn calculate_number_of_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    calculate_days_between(start, end)
}

/// `start` precedes `end` and is not before `now`
pub fn is_date_range_valid(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start < end && start >= now
}
