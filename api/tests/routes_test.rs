//! Health, category listing and fallback routes

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};
use sf_api::create_app;

use common::test_state;

#[actix_web::test]
async fn test_health_check_without_database() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["service"], "safiri-api");
    assert!(body["data"].get("database").is_none());
}

#[actix_web::test]
async fn test_categories_first_page_uses_default_limit() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/api/v1/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"][0]["id"], "sedan");
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "limit": 20, "total": 4, "totalPages": 1})
    );
}

#[actix_web::test]
async fn test_categories_second_page() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/categories?page=2&limit=3")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Executive");
    assert_eq!(
        body["pagination"],
        json!({"page": 2, "limit": 3, "total": 4, "totalPages": 2})
    );
}

#[actix_web::test]
async fn test_categories_clamp_limit() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/categories?page=-1&limit=1000")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 100);
}

#[actix_web::test]
async fn test_categories_rejects_non_numeric_query() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/categories?page=two")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_unknown_route_returns_not_found_envelope() {
    let app = test::init_service(create_app(test_state())).await;

    let req = test::TestRequest::get().uri("/api/v1/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": false, "error": "The requested resource was not found"})
    );
}
