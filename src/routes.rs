//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`          - Health check (database)
//! - `POST /customers`       - Create a customer
//! - `PATCH|PUT /customers/{id}` - Update a customer
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and per-request middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::customer_routes())
        .with_state(state)
        .layer(trace::layer())
}

/// Constructs the served application: [`router`] with trailing slashes trimmed
/// before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
