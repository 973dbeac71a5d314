//! Response builders and error interception

pub mod error;
pub mod response;

pub use error::{resolve_error, ApiError};
pub use response::{
    error_response, paginated_response, success_response, success_response_with_status,
    validation_error_response,
};
