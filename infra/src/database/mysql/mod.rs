//! MySQL repository implementations

pub mod seed_repository_impl;

pub use seed_repository_impl::MySqlSeedRepository;
