//! API response envelopes
//!
//! Every endpoint answers with the same `{success, data, error, message}`
//! shape; list endpoints add a `pagination` block.

use serde::{Deserialize, Serialize};

use super::pagination::PaginationMeta;
use crate::utils::validation::FieldError;

/// Error text used by validation envelopes
pub const VALIDATION_ERROR_LABEL: &str = "Validation Error";

/// Standard API response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = ()> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Attach a message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            message: self.message,
        }
    }
}

/// Payload of a validation failure envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorData {
    pub errors: Vec<FieldError>,
}

impl ApiResponse<ValidationErrorData> {
    /// `{success: false, error: "Validation Error", data: {errors}}`
    pub fn validation_failed(errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            data: Some(ValidationErrorData { errors }),
            error: Some(VALIDATION_ERROR_LABEL.to_string()),
            message: None,
        }
    }
}

/// Paginated variant of the envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub success: bool,

    pub data: Vec<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Create a paginated success response for one page of items
    pub fn new(data: Vec<T>, page: u32, limit: u32, total: u64) -> Self {
        Self {
            success: true,
            data,
            error: None,
            message: None,
            pagination: PaginationMeta::new(page, limit, total),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            success: self.success,
            data: self.data.into_iter().map(f).collect(),
            error: self.error,
            message: self.message,
            pagination: self.pagination,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(json!({"id": 1})).with_message("Created");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "data": {"id": 1}, "message": "Created"})
        );
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let response: ApiResponse = ApiResponse::error("Vehicle not found");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Vehicle not found"}));
    }

    #[test]
    fn test_validation_envelope_shape() {
        let response = ApiResponse::validation_failed(vec![FieldError::new(
            "email",
            "Invalid email address",
        )]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"], "Validation Error");
        assert_eq!(value["data"]["errors"][0]["field"], "email");
        assert_eq!(value["success"], false);
    }

    #[test]
    fn test_paginated_envelope_uses_camel_case_meta() {
        let response = PaginatedResponse::new(vec![1, 2, 3], 2, 3, 7);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value["pagination"],
            json!({"page": 2, "limit": 3, "total": 7, "totalPages": 3})
        );
    }
}
