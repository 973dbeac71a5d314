//! Customer entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sf_shared::errors::{AppError, AppResult};
use sf_shared::utils::date::parse_date;
use uuid::Uuid;

use crate::domain::value_objects::CustomerInput;

/// A renter or taxi passenger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// Canonical `+254…` form
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub driving_license: Option<String>,
    pub license_expiry: Option<DateTime<Utc>>,
    pub license_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a customer from inline booking details
    ///
    /// The input is validated and its phone numbers are sanitized first.
    pub fn from_input(input: &CustomerInput, now: DateTime<Utc>) -> AppResult<Self> {
        let errors = input.validate();
        if !errors.is_empty() {
            let summary = errors
                .errors()
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AppError::validation(summary));
        }

        let input = input.normalized();
        let license_expiry = input.license_expiry.as_deref().map(parse_date).transpose()?;

        Ok(Self {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            alternate_phone: input.alternate_phone,
            address: input.address,
            city: input.city,
            country: None,
            driving_license: input.driving_license,
            license_expiry,
            license_image_url: input.license_image_url,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// A licence with no recorded expiry counts as valid
    pub fn has_valid_license(&self, at: DateTime<Utc>) -> bool {
        self.driving_license.is_some() && self.license_expiry.map_or(true, |expiry| expiry > at)
    }
}
