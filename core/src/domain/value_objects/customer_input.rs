//! Inline customer details supplied with a booking.

use serde::{Deserialize, Serialize};
use sf_shared::utils::date::parse_date;
use sf_shared::utils::phone::{is_valid_phone, sanitize_phone};
use sf_shared::utils::validation::{is_valid_email, validators, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub alternate_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub driving_license: Option<String>,
    /// Date string, parsed on conversion
    #[serde(default)]
    pub license_expiry: Option<String>,
    #[serde(default)]
    pub license_image_url: Option<String>,
}

impl CustomerInput {
    /// Check field shapes, collecting every failure
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if !validators::not_empty(&self.first_name) {
            errors.add_error("firstName", "First name is required");
        }
        if !validators::not_empty(&self.last_name) {
            errors.add_error("lastName", "Last name is required");
        }
        if !is_valid_email(self.email.trim()) {
            errors.add_error("email", "Invalid email address");
        }
        if !is_valid_phone(&self.phone) {
            errors.add_error("phone", "Invalid phone number");
        }
        if let Some(alternate) = self.alternate_phone.as_deref() {
            if !is_valid_phone(alternate) {
                errors.add_error("alternatePhone", "Invalid phone number");
            }
        }
        if let Some(expiry) = self.license_expiry.as_deref() {
            if parse_date(expiry).is_err() {
                errors.add_error("licenseExpiry", "Invalid date");
            }
        }

        errors
    }

    /// Trimmed copy with phone numbers in canonical form
    pub fn normalized(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: sanitize_phone(&self.phone),
            alternate_phone: self.alternate_phone.as_deref().map(sanitize_phone),
            ..self.clone()
        }
    }
}
