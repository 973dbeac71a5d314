//! Helpers shared by the HTTP test suites

#![allow(dead_code)]

use actix_web::web;
use sf_api::AppState;
use sf_core::services::seed::SeedData;
use sf_shared::config::AppConfig;

pub fn test_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(AppConfig::default(), &SeedData::builtin()))
}
