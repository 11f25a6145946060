//! HTTP routes

pub mod catalog;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::pricing;
use crate::pricing::responses::HealthResponse;
use crate::AppState;

/// Full application router with middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/warehouses", get(catalog::warehouses))
        .route("/api/warehouses/:id/batteries", get(catalog::batteries))
        .route("/api/stations", get(catalog::stations))
        .route("/api/stations/:id/bikes", get(catalog::bikes))
        .route("/api/service-centers", get(catalog::service_centers))
        .route("/api/service-centers/:id/slots", get(catalog::slots))
        .route("/api/service-dates", get(catalog::service_dates))
        .route("/api/filter-options", get(catalog::filter_options))
        .merge(pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cache: state.cache.stats(),
    })
}
