//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`             - Liveness check
//! - `POST /weather`            - Weather lookup by CEP in the request body
//! - `GET  /weather/{zipcode}`  - Weather lookup by path-bound postal code
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, weather_by_cep_handler, weather_by_zipcode_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/weather", post(weather_by_cep_handler))
        .route("/weather/{zipcode}", get(weather_by_zipcode_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
