use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};
use sf_api::config::init_environment;
use sf_api::{create_app, AppState};
use sf_core::services::seed::SeedData;
use sf_infra::database::DatabasePool;
use sf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    init_environment(config.environment);
    info!("Starting Safiri API Server ({})", config.environment);

    let seed = SeedData::from_env().context("Failed to load reference categories")?;
    let mut state = AppState::new(config.clone(), &seed);
    info!("Loaded {} vehicle categories", state.categories.len());

    match config.database.clone() {
        Some(database) => {
            let pool = DatabasePool::new(database)
                .await
                .context("Failed to connect to the database")?;
            state = state.with_database(pool);
        }
        None => warn!("DATABASE_URL is not set; running without a database"),
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let state = web::Data::new(state);
    let factory_state = state.clone();
    let served = HttpServer::new(move || create_app(factory_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await;

    if let Some(pool) = &state.database {
        pool.close().await;
    }
    served.context("Server terminated with an error")
}
