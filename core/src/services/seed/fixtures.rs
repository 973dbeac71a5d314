//! Seed records, built in or loaded from a file.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sf_shared::utils::date::parse_date;
use sf_shared::utils::phone::sanitize_phone;
use uuid::Uuid;

use crate::domain::entities::{
    Admin, AdminRole, Customer, FuelType, Location, Transmission, Vehicle, VehicleCategory,
    VehicleStatus,
};
use crate::errors::{DomainError, DomainResult};

/// Names the file that replaces the built-in fixtures
pub const SEED_DATA_PATH_VAR: &str = "SEED_DATA_PATH";

// Keys stay snake_case: the config loader folds keys to lower case.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSeed {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl LocationSeed {
    pub fn to_location(&self) -> Location {
        Location {
            is_active: self.is_active,
            ..Location::new(
                self.id.as_str(),
                self.name.as_str(),
                self.city.as_str(),
                self.address.as_str(),
                self.latitude,
                self.longitude,
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeed {
    pub name: String,
    pub description: Option<String>,
    pub seats: u32,
    pub base_price: Decimal,
    pub price_per_km: Decimal,
    pub image: Option<String>,
    #[serde(default = "active")]
    pub is_active: bool,
}

impl CategorySeed {
    pub fn to_category(&self) -> VehicleCategory {
        VehicleCategory {
            description: self.description.clone(),
            image: self.image.clone(),
            is_active: self.is_active,
            ..VehicleCategory::new(self.name.as_str(), self.seats, self.base_price, self.price_per_km)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSeed {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub registration_no: String,
    pub color: String,
    pub seats: u32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub price_per_day: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: VehicleStatus,
    pub location_id: String,
    pub mileage: u32,
}

impl VehicleSeed {
    pub fn to_vehicle(&self, now: DateTime<Utc>) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            registration_no: self.registration_no.clone(),
            color: self.color.clone(),
            seats: self.seats,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
            price_per_day: self.price_per_day,
            images: self.images.clone(),
            features: self.features.clone(),
            description: self.description.clone(),
            status: self.status,
            location_id: self.location_id.clone(),
            mileage: self.mileage,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Admin bootstrap account; the password is hashed at seed time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub role: AdminRole,
}

impl AdminSeed {
    pub fn to_admin(&self, password_hash: String) -> Admin {
        Admin::new(
            self.email.as_str(),
            password_hash,
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.role,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub driving_license: Option<String>,
    /// Date string
    pub license_expiry: Option<String>,
}

impl CustomerSeed {
    pub fn to_customer(&self, now: DateTime<Utc>) -> DomainResult<Customer> {
        let license_expiry = self.license_expiry.as_deref().map(parse_date).transpose()?;
        Ok(Customer {
            id: Uuid::new_v4(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: sanitize_phone(&self.phone),
            alternate_phone: None,
            address: self.address.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            driving_license: self.driving_license.clone(),
            license_expiry,
            license_image_url: None,
            created_at: now,
            updated_at: now,
        })
    }
}

/// Everything the seed routine writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub locations: Vec<LocationSeed>,
    #[serde(default)]
    pub categories: Vec<CategorySeed>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSeed>,
    pub admin: AdminSeed,
    pub customer: Option<CustomerSeed>,
}

impl SeedData {
    /// Load from a TOML/JSON/YAML file (format by extension)
    pub fn from_file(path: &str) -> DomainResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to read seed data {}: {}", path, e)))?;

        settings
            .try_deserialize()
            .map_err(|e| DomainError::internal(format!("Invalid seed data in {}: {}", path, e)))
    }

    /// The file named by `SEED_DATA_PATH`, else the built-in records
    pub fn from_env() -> DomainResult<Self> {
        match std::env::var(SEED_DATA_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()),
            _ => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self {
            locations: vec![
                location("nairobi-loc", "Nairobi", "Nairobi CBD, Kenya", -1.286389, 36.817223),
                location("kisumu-loc", "Kisumu", "Kisumu City Center, Kenya", -0.091702, 34.767956),
                location("nakuru-loc", "Nakuru", "Nakuru Town, Kenya", -0.303099, 36.080025),
                location("mombasa-loc", "Mombasa", "Mombasa Island, Kenya", -4.043477, 39.668206),
                location("eldoret-loc", "Eldoret", "Eldoret Town, Kenya", 0.514277, 35.269779),
            ],
            categories: vec![
                category("Sedan", "Comfortable sedan for up to 4 passengers", 4, 2000, 50, "sedan"),
                category("SUV", "Spacious SUV for up to 6 passengers", 6, 3500, 70, "suv"),
                category("Van", "Large van for up to 12 passengers", 12, 5000, 90, "van"),
                category("Executive", "Luxury executive car for up to 3 passengers", 3, 5000, 100, "executive"),
            ],
            vehicles: builtin_vehicles(),
            admin: AdminSeed {
                email: "admin@transport.com".to_string(),
                password: "admin123".to_string(),
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                role: AdminRole::SuperAdmin,
            },
            customer: Some(CustomerSeed {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "+254712345678".to_string(),
                address: Some("123 Sample Street".to_string()),
                city: Some("Nairobi".to_string()),
                country: Some("Kenya".to_string()),
                driving_license: Some("DL123456789".to_string()),
                license_expiry: Some("2026-12-31".to_string()),
            }),
        }
    }
}

fn active() -> bool {
    true
}

fn location(id: &str, city: &str, address: &str, latitude: f64, longitude: f64) -> LocationSeed {
    LocationSeed {
        id: id.to_string(),
        name: city.to_string(),
        city: city.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
        is_active: true,
    }
}

fn category(name: &str, description: &str, seats: u32, base: i64, per_km: i64, image: &str) -> CategorySeed {
    CategorySeed {
        name: name.to_string(),
        description: Some(description.to_string()),
        seats,
        base_price: Decimal::from(base),
        price_per_km: Decimal::from(per_km),
        image: Some(format!("/images/categories/{}.jpg", image)),
        is_active: true,
    }
}

struct VehicleSpec<'a> {
    brand: &'a str,
    model: &'a str,
    year: i32,
    registration_no: &'a str,
    color: &'a str,
    seats: u32,
    transmission: Transmission,
    fuel_type: FuelType,
    price_per_day: i64,
    images: &'a [&'a str],
    features: &'a [&'a str],
    description: &'a str,
    location_id: &'a str,
    mileage: u32,
}

impl VehicleSpec<'_> {
    fn seed(&self, name: &str) -> VehicleSeed {
        let strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        VehicleSeed {
            name: name.to_string(),
            brand: self.brand.to_string(),
            model: self.model.to_string(),
            year: self.year,
            registration_no: self.registration_no.to_string(),
            color: self.color.to_string(),
            seats: self.seats,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
            price_per_day: Decimal::from(self.price_per_day),
            images: strings(self.images),
            features: strings(self.features),
            description: Some(self.description.to_string()),
            status: VehicleStatus::Available,
            location_id: self.location_id.to_string(),
            mileage: self.mileage,
        }
    }
}

fn builtin_vehicles() -> Vec<VehicleSeed> {
    vec![
        VehicleSpec {
            brand: "Toyota",
            model: "Corolla",
            year: 2022,
            registration_no: "KCA 123A",
            color: "Silver",
            seats: 5,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Petrol,
            price_per_day: 3500,
            images: &["/images/vehicles/corolla-1.jpg", "/images/vehicles/corolla-2.jpg"],
            features: &["AC", "GPS", "Bluetooth", "USB Charging"],
            description: "Reliable and fuel-efficient sedan, perfect for city driving.",
            location_id: "nairobi-loc",
            mileage: 45000,
        }
        .seed("Toyota Corolla 2022"),
        VehicleSpec {
            brand: "Honda",
            model: "CRV",
            year: 2023,
            registration_no: "KCB 456B",
            color: "Black",
            seats: 7,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Petrol,
            price_per_day: 5500,
            images: &["/images/vehicles/crv-1.jpg"],
            features: &["AC", "GPS", "Bluetooth", "Leather Seats", "Sunroof"],
            description: "Spacious SUV ideal for family trips and road adventures.",
            location_id: "nairobi-loc",
            mileage: 12000,
        }
        .seed("Honda CRV 2023"),
        VehicleSpec {
            brand: "Nissan",
            model: "X-Trail",
            year: 2021,
            registration_no: "KCC 789C",
            color: "White",
            seats: 7,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Diesel,
            price_per_day: 4800,
            images: &["/images/vehicles/xtrail-1.jpg"],
            features: &["AC", "GPS", "Bluetooth", "4WD"],
            description: "Powerful SUV with 4WD capability for any terrain.",
            location_id: "kisumu-loc",
            mileage: 68000,
        }
        .seed("Nissan X-Trail 2021"),
        VehicleSpec {
            brand: "Mazda",
            model: "Demio",
            year: 2020,
            registration_no: "KCD 234D",
            color: "Blue",
            seats: 5,
            transmission: Transmission::Manual,
            fuel_type: FuelType::Petrol,
            price_per_day: 2800,
            images: &["/images/vehicles/demio-1.jpg"],
            features: &["AC", "Bluetooth", "USB Charging"],
            description: "Compact and economical car, great for budget travelers.",
            location_id: "mombasa-loc",
            mileage: 92000,
        }
        .seed("Mazda Demio 2020"),
        VehicleSpec {
            brand: "Toyota",
            model: "Land Cruiser Prado",
            year: 2023,
            registration_no: "KCE 567E",
            color: "Pearl White",
            seats: 7,
            transmission: Transmission::Automatic,
            fuel_type: FuelType::Diesel,
            price_per_day: 8500,
            images: &["/images/vehicles/prado-1.jpg", "/images/vehicles/prado-2.jpg"],
            features: &["AC", "GPS", "Bluetooth", "Leather Seats", "4WD", "Sunroof", "Cruise Control"],
            description: "Premium SUV with luxury features and excellent off-road capability.",
            location_id: "nairobi-loc",
            mileage: 8000,
        }
        .seed("Toyota Prado 2023"),
    ]
}
