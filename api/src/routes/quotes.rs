//! Price quotes for rentals and taxi rides
//!
//! Quotes are computed, never stored.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use sf_core::domain::value_objects::TaxiPriceCalculation;
use sf_core::services::pricing::{
    calculate_number_of_days, calculate_vehicle_booking_price, is_date_range_valid,
};
use sf_shared::errors::AppError;
use sf_shared::utils::currency::format_currency;
use sf_shared::utils::date::{format_date, parse_date, DateFormat};
use validator::Validate;

use crate::app::AppState;
use crate::dto::{TaxiQuoteRequest, TaxiQuoteResponse, VehicleQuoteRequest, VehicleQuoteResponse};
use crate::handlers::{success_response, ApiError};

/// `POST /api/v1/quotes/vehicle`
pub async fn vehicle_quote(
    state: web::Data<AppState>,
    request: web::Json<VehicleQuoteRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let pickup = parse_date(&request.pickup_date)?;
    let dropoff = parse_date(&request.dropoff_date)?;
    if !is_date_range_valid(pickup, dropoff, Utc::now()) {
        return Err(AppError::validation(
            "Pickup date must not be in the past and must precede the drop-off date",
        )
        .into());
    }

    let pricing = &state.config.pricing;
    let number_of_days = calculate_number_of_days(pickup, dropoff);
    let price =
        calculate_vehicle_booking_price(request.price_per_day, number_of_days, pricing.tax_rate)?;

    Ok(success_response(
        VehicleQuoteResponse {
            pickup_date: format_date(pickup, DateFormat::Iso),
            dropoff_date: format_date(dropoff, DateFormat::Iso),
            number_of_days,
            price_per_day: request.price_per_day,
            subtotal: price.subtotal,
            tax: price.tax,
            total_amount: price.total_amount,
            currency: pricing.currency.clone(),
            formatted_total: format_currency(price.total_amount, &pricing.currency),
        },
        None,
    ))
}

/// `POST /api/v1/quotes/taxi`
pub async fn taxi_quote(
    state: web::Data<AppState>,
    request: web::Json<TaxiQuoteRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let category = state
        .categories
        .iter()
        .find(|c| c.is_active && c.id == request.category_id)
        .ok_or_else(|| AppError::not_found("Vehicle category"))?;

    if let Some(passengers) = request.passengers {
        if !category.can_carry(passengers) {
            return Err(AppError::validation(format!(
                "{} seats at most {} passengers",
                category.name, category.seats
            ))
            .into());
        }
    }

    let pricing = &state.config.pricing;
    let quote = TaxiPriceCalculation::for_category(category, request.distance, pricing.tax_rate)?;
    let formatted_total = format_currency(quote.total_amount, &pricing.currency);

    Ok(success_response(
        TaxiQuoteResponse {
            quote,
            currency: pricing.currency.clone(),
            formatted_total,
        },
        None,
    ))
}
