//! MySQL implementation of the SeedRepository trait.
//!
//! Upserts use `INSERT … ON DUPLICATE KEY UPDATE <key> = <key>`, a no-op on
//! conflict, then read back the stored row.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sf_core::domain::entities::{Admin, Customer, Location, Vehicle, VehicleCategory};
use sf_core::errors::DomainError;
use sf_core::repositories::SeedRepository;

use crate::database::errors::map_sqlx_error;

pub struct MySqlSeedRepository {
    pool: MySqlPool,
}

impl MySqlSeedRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_location(row: &MySqlRow) -> Result<Location, DomainError> {
        Ok(Location {
            id: row.try_get("id").map_err(column_error)?,
            name: row.try_get("name").map_err(column_error)?,
            city: row.try_get("city").map_err(column_error)?,
            address: row.try_get("address").map_err(column_error)?,
            latitude: row.try_get("latitude").map_err(column_error)?,
            longitude: row.try_get("longitude").map_err(column_error)?,
            is_active: row.try_get("is_active").map_err(column_error)?,
        })
    }

    fn row_to_category(row: &MySqlRow) -> Result<VehicleCategory, DomainError> {
        Ok(VehicleCategory {
            id: row.try_get("id").map_err(column_error)?,
            name: row.try_get("name").map_err(column_error)?,
            description: row.try_get("description").map_err(column_error)?,
            seats: row.try_get("seats").map_err(column_error)?,
            base_price: row.try_get("base_price").map_err(column_error)?,
            price_per_km: row.try_get("price_per_km").map_err(column_error)?,
            image: row.try_get("image").map_err(column_error)?,
            is_active: row.try_get("is_active").map_err(column_error)?,
        })
    }

    fn row_to_admin(row: &MySqlRow) -> Result<Admin, DomainError> {
        let id: String = row.try_get("id").map_err(column_error)?;
        let role: String = row.try_get("role").map_err(column_error)?;

        Ok(Admin {
            id: parse_uuid(&id)?,
            email: row.try_get("email").map_err(column_error)?,
            password_hash: row.try_get("password_hash").map_err(column_error)?,
            first_name: row.try_get("first_name").map_err(column_error)?,
            last_name: row.try_get("last_name").map_err(column_error)?,
            role: from_db_label(role)?,
            is_active: row.try_get("is_active").map_err(column_error)?,
            last_login_at: row.try_get("last_login_at").map_err(column_error)?,
            created_at: row.try_get("created_at").map_err(column_error)?,
        })
    }
}

#[async_trait]
impl SeedRepository for MySqlSeedRepository {
    async fn upsert_location(&self, location: &Location) -> Result<Location, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO locations (id, name, city, address, latitude, longitude, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE id = id
            "#,
        )
        .bind(&location.id)
        .bind(&location.name)
        .bind(&location.city)
        .bind(&location.address)
        .bind(location.latitude)
        .bind(location.longitude)
        .bind(location.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let row = sqlx::query(
            "SELECT id, name, city, address, latitude, longitude, is_active FROM locations WHERE id = ?",
        )
        .bind(&location.id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Self::row_to_location(&row)
    }

    async fn upsert_category(&self, category: &VehicleCategory) -> Result<VehicleCategory, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO vehicle_categories
                (id, name, description, seats, base_price, price_per_km, image, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE name = name
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.seats)
        .bind(category.base_price)
        .bind(category.price_per_km)
        .bind(&category.image)
        .bind(category.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let row = sqlx::query(
            r#"
            SELECT id, name, description, seats, base_price, price_per_km, image, is_active
            FROM vehicle_categories WHERE name = ?
            "#,
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Self::row_to_category(&row)
    }

    async fn create_vehicle(&self, vehicle: &Vehicle) -> Result<Vehicle, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO vehicles (
                id, name, brand, model, year, registration_no, color, seats,
                transmission, fuel_type, price_per_day, images, features, description,
                status, location_id, mileage, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(vehicle.id.to_string())
        .bind(&vehicle.name)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.registration_no)
        .bind(&vehicle.color)
        .bind(vehicle.seats)
        .bind(to_db_label(&vehicle.transmission)?)
        .bind(to_db_label(&vehicle.fuel_type)?)
        .bind(vehicle.price_per_day)
        .bind(Json(&vehicle.images))
        .bind(Json(&vehicle.features))
        .bind(&vehicle.description)
        .bind(to_db_label(&vehicle.status)?)
        .bind(&vehicle.location_id)
        .bind(vehicle.mileage)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::debug!(registration_no = %vehicle.registration_no, "Vehicle created");
        Ok(vehicle.clone())
    }

    async fn upsert_admin(&self, admin: &Admin) -> Result<Admin, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO admins
                (id, email, password_hash, first_name, last_name, role, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE email = email
            "#,
        )
        .bind(admin.id.to_string())
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(&admin.first_name)
        .bind(&admin.last_name)
        .bind(to_db_label(&admin.role)?)
        .bind(admin.is_active)
        .bind(admin.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, first_name, last_name, role, is_active,
                   last_login_at, created_at
            FROM admins WHERE email = ?
            "#,
        )
        .bind(&admin.email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Self::row_to_admin(&row)
    }

    async fn create_customer(&self, customer: &Customer) -> Result<Customer, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                id, first_name, last_name, email, phone, alternate_phone, address, city,
                country, driving_license, license_expiry, license_image_url, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(customer.id.to_string())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.alternate_phone)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.country)
        .bind(&customer.driving_license)
        .bind(customer.license_expiry)
        .bind(&customer.license_image_url)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(customer.clone())
    }
}

fn column_error(error: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to read column: {}", error))
}

fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))
}

/// The serde label of a unit enum variant, as stored in VARCHAR columns
pub(crate) fn to_db_label<T: Serialize>(value: &T) -> Result<String, DomainError> {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(label)) => Ok(label),
        Ok(other) => Err(DomainError::internal(format!("Not a label: {}", other))),
        Err(e) => Err(DomainError::internal(e.to_string())),
    }
}

pub(crate) fn from_db_label<T: DeserializeOwned>(label: String) -> Result<T, DomainError> {
    serde_json::from_value(serde_json::Value::String(label))
        .map_err(|e| DomainError::internal(format!("Unknown stored value: {}", e)))
}
