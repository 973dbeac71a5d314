use actix_web::{web, HttpResponse};
use serde::Serialize;
use sf_infra::database::DatabaseHealth;

use crate::app::AppState;
use crate::handlers::success_response;

pub const SERVICE_NAME: &str = "safiri-api";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// Absent when no database is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealth>,
}

/// `GET /health`; `degraded` when the database stops answering
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match &state.database {
        Some(pool) => Some(pool.health_check().await),
        None => None,
    };
    let status = match database {
        Some(health) if !health.reachable => "degraded",
        _ => "healthy",
    };

    success_response(
        HealthStatus {
            status,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
            database,
        },
        None,
    )
}
