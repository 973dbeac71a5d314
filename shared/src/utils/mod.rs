//! Common utility functions

pub mod currency;
pub mod date;
pub mod phone;
pub mod text;
pub mod validation;

// Re-export commonly used utilities
pub use currency::{format_currency, parse_currency, DEFAULT_CURRENCY};
pub use date::{add_days, calculate_days_between, format_date, is_date_in_past, parse_date, DateFormat};
pub use phone::{is_valid_phone, mask_phone_number, sanitize_phone};
pub use text::{capitalize, slugify, truncate};
pub use validation::{is_valid_email, FieldError, ValidationErrors};
