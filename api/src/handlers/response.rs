//! Envelope builders
//!
//! Every response the API writes goes through one of these functions.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use sf_shared::types::{ApiResponse, PaginatedResponse};
use sf_shared::utils::validation::FieldError;

/// `{success: true, data, message?}` with status 200
pub fn success_response<T: Serialize>(data: T, message: Option<&str>) -> HttpResponse {
    success_response_with_status(data, message, StatusCode::OK)
}

pub fn success_response_with_status<T: Serialize>(
    data: T,
    message: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let mut body = ApiResponse::success(data);
    if let Some(message) = message {
        body = body.with_message(message);
    }
    HttpResponse::build(status).json(body)
}

/// `{success: false, error}`
pub fn error_response(error: impl Into<String>, status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::<()>::error(error))
}

/// `{success: false, error: "Validation Error", data: {errors}}` with status 422
pub fn validation_error_response(errors: Vec<FieldError>) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ApiResponse::validation_failed(errors))
}

/// One page of items plus the `pagination` block
pub fn paginated_response<T: Serialize>(
    data: Vec<T>,
    page: u32,
    limit: u32,
    total: u64,
) -> HttpResponse {
    HttpResponse::Ok().json(PaginatedResponse::new(data, page, limit, total))
}
