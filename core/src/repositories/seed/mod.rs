pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockSeedRepository;
pub use r#trait::SeedRepository;

#[cfg(test)]
mod tests;
