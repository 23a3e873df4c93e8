use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    store: &'static str,
    environment: String,
    version: &'static str,
    same_day_policy: String,
    page_size: usize,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "OK",
        store: state.store.backend_name(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION"),
        same_day_policy: state.pricing.options().same_day_policy.to_string(),
        page_size: state.catalog.page_size(),
    })
}
