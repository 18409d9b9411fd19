//! API route configuration.

use crate::api::handlers::{create_customer_handler, update_customer_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{patch, post},
};

/// Customer routes.
///
/// # Endpoints
///
/// - `POST  /customers`      - Create a customer
/// - `PATCH /customers/{id}` - Partially update a customer
/// - `PUT   /customers/{id}` - Same as `PATCH`
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(create_customer_handler))
        .route(
            "/customers/{id}",
            patch(update_customer_handler).put(update_customer_handler),
        )
}
