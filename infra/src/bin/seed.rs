//! Populate the database with reference and demo data.
//!
//! Reads `DATABASE_URL` (and optionally `SEED_DATA_PATH`) from the
//! environment or a `.env` file. Exits with status 1 on any failure.

use anyhow::Context;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use sf_core::services::seed::{SeedData, SeedService};
use sf_infra::config::DatabaseConfig;
use sf_shared::config::{Environment, LoggingConfig};
use sf_infra::database::{DatabasePool, MySqlSeedRepository};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let logging = LoggingConfig::for_environment(Environment::from_env());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_file(logging.source_location)
        .with_line_number(logging.source_location)
        .init();

    match run().await {
        Ok(()) => {
            tracing::info!("Database seeded successfully");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("Error seeding database: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    tracing::info!("Starting database seed");

    let config = DatabaseConfig::from_env()?;
    let data = SeedData::from_env().context("loading seed data")?;

    let pool = DatabasePool::new(config).await.context("connecting to database")?;
    pool.run_migrations().await.context("applying migrations")?;

    let repository = Arc::new(MySqlSeedRepository::new(pool.get_pool().clone()));
    let result = SeedService::new(repository, data).run().await;
    pool.close().await;

    let report = result.context("seeding")?;
    tracing::info!(
        locations = report.locations,
        categories = report.categories,
        vehicles = report.vehicles,
        admin = %report.admin_email,
        "Seed complete"
    );
    Ok(())
}
