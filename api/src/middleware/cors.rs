//! CORS middleware configuration for cross-origin requests.
//!
//! Development accepts any origin so local web and mobile clients can reach
//! the API. Outside development only the origins listed in
//! `CORS_ALLOWED_ORIGINS` are accepted; with none listed, no cross-origin
//! request is.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use sf_shared::config::{Environment, ServerConfig};

/// Preflight cache lifetime in seconds
pub const CORS_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    if environment.is_development() {
        return create_permissive_cors();
    }
    if server.allowed_origins.is_empty() {
        log::warn!("CORS_ALLOWED_ORIGINS is empty; cross-origin requests will be rejected");
    }
    create_restricted_cors(&server.allowed_origins)
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
        Method::OPTIONS,
    ]
}

fn create_permissive_cors() -> Cors {
    log::info!("Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::CACHE_CONTROL,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(CORS_MAX_AGE)
}

fn create_restricted_cors(origins: &[String]) -> Cors {
    log::info!("Configuring CORS for {} allowed origin(s)", origins.len());

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(CORS_MAX_AGE);

    for origin in origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Service;
    use actix_web::{test, web, App, HttpResponse};

    async fn allowed_origin_header(cors: Cors, origin: &str) -> Option<String> {
        let app = test::init_service(
            App::new()
                .wrap(cors)
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, origin))
            .to_request();

        match app.call(req).await {
            Ok(resp) => resp
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok())
                .map(String::from),
            Err(_) => None,
        }
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let cors = create_cors(&ServerConfig::default(), Environment::Development);
        assert!(allowed_origin_header(cors, "http://localhost:3000").await.is_some());
    }

    #[actix_web::test]
    async fn test_production_without_origins_allows_none() {
        let cors = create_cors(&ServerConfig::default(), Environment::Production);
        assert_eq!(allowed_origin_header(cors, "https://unknown.example").await, None);
    }

    #[actix_web::test]
    async fn test_staging_allows_listed_origin_only() {
        let mut server = ServerConfig::default();
        server.allowed_origins = vec!["https://app.safiri.co.ke".to_string()];

        let listed = create_cors(&server, Environment::Staging);
        assert_eq!(
            allowed_origin_header(listed, "https://app.safiri.co.ke").await.as_deref(),
            Some("https://app.safiri.co.ke")
        );

        let other = create_cors(&server, Environment::Staging);
        assert_eq!(allowed_origin_header(other, "https://unknown.example").await, None);
    }
}
