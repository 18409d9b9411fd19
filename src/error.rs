//! Application error type and its HTTP representation.
//!
//! Every handler returns `Result<_, AppError>`, so each failure path ends in
//! exactly one JSON response of the form `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::repositories::RepositoryError;

/// Message returned when a write collides with an existing customer email.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "A customer with the provided email already exists";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Request failed with internal error");
                message
            }
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message } => message,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Default mapping of repository failures.
///
/// Services override the `NotFound` message where they know which entity
/// was missing.
impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        if e.is_duplicate_email() {
            return AppError::conflict(DUPLICATE_EMAIL_MESSAGE);
        }

        match e {
            RepositoryError::NotFound => AppError::not_found("Record not found"),
            other => AppError::internal(other.to_string()),
        }
    }
}

/// Undecodable JSON bodies are client errors and use the common error shape.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::EMAIL_UNIQUE_CONSTRAINT;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("x").status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_email_maps_to_conflict() {
        let err = AppError::from(RepositoryError::UniqueViolation {
            constraint: Some(EMAIL_UNIQUE_CONSTRAINT.to_string()),
        });

        assert_eq!(err, AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
    }

    #[test]
    fn test_database_error_keeps_raw_message() {
        let err = AppError::from(RepositoryError::Database("relation missing".to_string()));

        assert_eq!(err, AppError::internal("relation missing"));
    }

    #[test]
    fn test_other_unique_violation_is_internal() {
        let err = AppError::from(RepositoryError::UniqueViolation {
            constraint: Some("contacts_customer_id_key".to_string()),
        });

        assert!(matches!(err, AppError::Internal { .. }));
    }
}
