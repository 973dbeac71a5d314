//! Error interception for HTTP handlers
//!
//! Handlers return `Result<HttpResponse, ApiError>`. Whatever they fail with is
//! rendered here through the envelope builders.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sf_core::errors::{DomainError, StorageErrorCode};
use sf_shared::config::Environment;
use sf_shared::errors::AppError;
use sf_shared::utils::validation::{FieldError, ValidationErrors};
use thiserror::Error;

use super::response::{error_response, validation_error_response};
use crate::config::current_environment;

pub const UNIQUE_VIOLATION_MESSAGE: &str = "Resource already exists";
pub const FOREIGN_KEY_VIOLATION_MESSAGE: &str = "Invalid reference to related resource";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Any failure a handler can return
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Field-level input errors
    #[error("Validation Error")]
    Validation(Vec<FieldError>),
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        ApiError::Domain(DomainError::App(error))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors.into_errors())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                let field = to_camel_case(&field.to_string());
                errors
                    .iter()
                    .map(|error| {
                        let message = error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| format!("Invalid {}", field));
                        FieldError::new(field.clone(), message)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(fields)
    }
}

/// Status and client-facing message for a domain error
///
/// Taxonomy errors keep their own status and message. Constraint violations
/// become 409/400. Everything else is a 500 whose detail is hidden in production.
pub fn resolve_error(error: &DomainError, environment: Environment) -> (StatusCode, String) {
    match error {
        DomainError::App(app) => (
            StatusCode::from_u16(app.status).unwrap_or(StatusCode::BAD_REQUEST),
            app.message.clone(),
        ),
        DomainError::Storage {
            code: StorageErrorCode::UniqueViolation,
            ..
        } => (StatusCode::CONFLICT, UNIQUE_VIOLATION_MESSAGE.to_string()),
        DomainError::Storage {
            code: StorageErrorCode::ForeignKeyViolation,
            ..
        } => (StatusCode::BAD_REQUEST, FOREIGN_KEY_VIOLATION_MESSAGE.to_string()),
        DomainError::Storage { message, .. } | DomainError::Internal { message } => {
            let message = if environment.exposes_internal_errors() {
                message.clone()
            } else {
                INTERNAL_ERROR_MESSAGE.to_string()
            };
            (StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => resolve_error(error, current_environment()).0,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => {
                let (status, message) = resolve_error(error, current_environment());
                if status.is_server_error() {
                    log::error!("API Error: {}", error);
                } else {
                    log::debug!("Request failed with {}: {}", status.as_u16(), message);
                }
                error_response(message, status)
            }
            ApiError::Validation(errors) => validation_error_response(errors.clone()),
        }
    }
}

/// `pickup_date` -> `pickupDate`, matching the JSON field names
fn to_camel_case(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}
