//! Application error taxonomy shared by every layer
//!
//! Every operational failure is one `AppError`: a kind, a message and the
//! HTTP status it maps to. The kinds differ only by their default status.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error kinds of the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Generic application error with a caller-supplied status
    App,
    /// A referenced resource does not exist
    NotFound,
    /// Malformed or rejected input
    Validation,
    /// Missing or invalid credentials
    Unauthorized,
    /// Duplicate or otherwise conflicting state
    Conflict,
}

impl ErrorKind {
    /// Default HTTP status for this kind
    pub fn default_status(&self) -> u16 {
        match self {
            ErrorKind::App => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Validation => 422,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Conflict => 409,
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::App => error_codes::BAD_REQUEST,
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::Validation => error_codes::VALIDATION_ERROR,
            ErrorKind::Unauthorized => error_codes::UNAUTHORIZED,
            ErrorKind::Conflict => error_codes::CONFLICT,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An operational error carrying its HTTP status
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: u16,
    /// Operational errors are expected failures whose message is safe to show
    pub is_operational: bool,
}

impl AppError {
    /// Create a generic application error with an explicit status
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            kind: ErrorKind::App,
            message: message.into(),
            status,
            is_operational: true,
        }
    }

    /// Generic application error with the default status (400)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, ErrorKind::App.default_status())
    }

    /// `"<resource> not found"` with status 404
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::of_kind(ErrorKind::NotFound, format!("{} not found", resource))
    }

    /// Validation failure with status 422
    pub fn validation(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Validation, message)
    }

    /// Authentication failure with status 401
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Unauthorized, message)
    }

    /// Authentication failure with the stock `"Unauthorized"` message
    pub fn unauthorized_default() -> Self {
        Self::unauthorized("Unauthorized")
    }

    /// Conflict with status 409
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Conflict, message)
    }

    fn of_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: kind.default_status(),
            is_operational: true,
        }
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const CONFLICT: &str = "CONFLICT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Result type with `AppError` as error
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_and_status() {
        let error = AppError::not_found("Vehicle");
        assert_eq!(error.message, "Vehicle not found");
        assert_eq!(error.status, 404);
        assert_eq!(error.to_string(), "Vehicle not found");
        assert!(error.is_kind(ErrorKind::NotFound));
    }

    #[test]
    fn test_default_statuses() {
        assert_eq!(AppError::bad_request("bad").status, 400);
        assert_eq!(AppError::validation("invalid").status, 422);
        assert_eq!(AppError::conflict("taken").status, 409);
        assert_eq!(AppError::new("teapot", 418).status, 418);
    }

    #[test]
    fn test_unauthorized_default_message() {
        let error = AppError::unauthorized_default();
        assert_eq!(error.message, "Unauthorized");
        assert_eq!(error.status, 401);
        assert_eq!(error.kind.code(), error_codes::UNAUTHORIZED);
    }
}
