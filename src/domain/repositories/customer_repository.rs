//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer};
use async_trait::async_trait;
use thiserror::Error;

/// Failure kinds reported by a [`CustomerRepository`].
///
/// Callers match on the variant instead of inspecting driver error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The targeted row does not exist.
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the write.
    #[error("unique constraint violation on {}", .constraint.as_deref().unwrap_or("unknown constraint"))]
    UniqueViolation { constraint: Option<String> },

    /// Any other datastore failure, carrying the driver's message.
    #[error("{0}")]
    Database(String),
}

impl RepositoryError {
    /// Returns true if the error is the email uniqueness violation.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(
            self,
            RepositoryError::UniqueViolation { constraint: Some(c) } if c == EMAIL_UNIQUE_CONSTRAINT
        )
    }
}

/// Name of the unique constraint guarding `contacts.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "contacts_email_key";

/// Repository interface for managing customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_customer.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Creates a customer together with its contact.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UniqueViolation`] if the email is already taken.
    /// Returns [`RepositoryError::Database`] on other database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, RepositoryError>;

    /// Finds a customer by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, RepositoryError>;

    /// Persists `customer` as the new state of the record with the given ID.
    ///
    /// The contact is written as a whole; `None` leaves the stored contact as is.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no customer has this ID.
    /// Returns [`RepositoryError::UniqueViolation`] if the new email is taken.
    /// Returns [`RepositoryError::Database`] on other database errors.
    async fn update(&self, id: i64, customer: &Customer) -> Result<Customer, RepositoryError>;
}
