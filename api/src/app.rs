//! Application state and factory
//!
//! This module holds the state shared by all workers and provides the
//! factory for creating the Actix-web application.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{error, middleware::Logger, web, App, HttpRequest, HttpResponse};
use sf_core::domain::entities::VehicleCategory;
use sf_core::services::seed::SeedData;
use sf_infra::database::DatabasePool;
use sf_shared::config::AppConfig;

use crate::handlers::error_response;
use crate::middleware::cors::create_cors;
use crate::routes::{categories, health, quotes};

/// State shared by every worker
pub struct AppState {
    pub config: AppConfig,
    /// Taxi tiers offered for quotes
    pub categories: Vec<VehicleCategory>,
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn new(config: AppConfig, seed: &SeedData) -> Self {
        Self {
            config,
            categories: seed.categories.iter().map(|c| c.to_category()).collect(),
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}

/// Create and configure the application
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&app_state.config.server, app_state.config.environment);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/quotes")
                        .route("/vehicle", web::post().to(quotes::vehicle_quote))
                        .route("/taxi", web::post().to(quotes::taxi_quote)),
                )
                .route("/categories", web::get().to(categories::list_categories)),
        )
        .default_service(web::route().to(not_found))
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(format!("Invalid request body: {}", err), StatusCode::BAD_REQUEST);
    error::InternalError::from_response(err, response).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = error_response(format!("Invalid query string: {}", err), StatusCode::BAD_REQUEST);
    error::InternalError::from_response(err, response).into()
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response("The requested resource was not found", StatusCode::NOT_FOUND)
}
