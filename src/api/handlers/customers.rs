//! Handlers for customer endpoints (create, update).

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::api::dto::customer::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::api::extract::JsonBody;
use crate::application::services::customer_service::CUSTOMER_NOT_FOUND_MESSAGE;
use crate::domain::entities::{CustomerPatch, NewCustomer};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a customer.
///
/// # Endpoint
///
/// `POST /customers`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "phone": "555-0100", "email": "ada@example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 if any field is missing or empty (nothing is written). A
/// missing body or a non-JSON content type counts as every field missing.
/// Returns 409 if the email belongs to another customer.
/// Returns 500 with the database message on any other failure.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    let new_customer = NewCustomer::try_from(payload)?;

    let customer = state.customer_service.create_customer(new_customer).await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// Partially updates a customer's name and contact.
///
/// # Endpoint
///
/// `PATCH /customers/{id}` (also `PUT`)
///
/// Omitted or empty fields keep their stored value. Body presence is checked
/// before the id is looked at, so an empty body is always a 400.
///
/// # Errors
///
/// Returns 400 if neither `name` nor `contact` is provided.
/// Returns 404 if the customer does not exist.
/// Returns 409 if the new email belongs to another customer.
/// Returns 500 with the database message on any other failure.
pub async fn update_customer_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    JsonBody(payload): JsonBody<UpdateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), AppError> {
    payload.check()?;

    // A non-numeric id cannot name an existing customer.
    let Path(id) = id.map_err(|_| AppError::not_found(CUSTOMER_NOT_FOUND_MESSAGE))?;

    let customer = state
        .customer_service
        .update_customer(id, CustomerPatch::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into())))
}
