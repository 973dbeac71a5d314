//! One-shot population of reference and demo data.

mod fixtures;
mod service;

#[cfg(test)]
mod tests;

pub use fixtures::{
    AdminSeed, CategorySeed, CustomerSeed, LocationSeed, SeedData, VehicleSeed, SEED_DATA_PATH_VAR,
};
pub use service::{SeedReport, SeedService, DEFAULT_BCRYPT_COST};
