//! Type definitions module with domain-specific sub-modules
//!
//! - `common` - Timestamps and date ranges
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response envelopes

pub mod common;
pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use common::{DateRange, Timestamp};
pub use pagination::{
    calculate_total_pages, get_pagination_params, PaginationMeta, PaginationParams,
    PaginationResult,
};
pub use response::{ApiResponse, PaginatedResponse, ValidationErrorData, VALIDATION_ERROR_LABEL};
