pub mod seed;

pub use seed::{MockSeedRepository, SeedRepository};
