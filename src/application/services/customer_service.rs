//! Customer management service.

use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};
use crate::domain::repositories::{CustomerRepository, RepositoryError};
use crate::error::AppError;
use std::sync::Arc;

pub const MISSING_UPDATE_FIELD_MESSAGE: &str = "Missing field in request body";
pub const CUSTOMER_NOT_FOUND_MESSAGE: &str = "Customer with that id does not exist";

/// Service for creating and updating customers.
///
/// Each call performs at most one write and never retries; consistency
/// (email uniqueness) is left to the datastore.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    /// Creates a new customer service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a customer with its contact.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let customer = self.repository.create(new_customer).await?;

        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    /// Applies a partial update to an existing customer.
    ///
    /// Fetches the current record, merges the patch into it (see
    /// [`Customer::merged`]), and persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the patch carries no field.
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Conflict`] if the new email is already in use.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_customer(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<Customer, AppError> {
        if patch.is_empty() {
            return Err(AppError::bad_request(MISSING_UPDATE_FIELD_MESSAGE));
        }

        let existing = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::debug!(customer_id = id, "Customer not found");
            AppError::not_found(CUSTOMER_NOT_FOUND_MESSAGE)
        })?;

        let merged = existing.merged(&patch);

        let updated = self
            .repository
            .update(id, &merged)
            .await
            .map_err(|e| match e {
                // Deleted between the fetch and the write.
                RepositoryError::NotFound => AppError::not_found(CUSTOMER_NOT_FOUND_MESSAGE),
                other => other.into(),
            })?;

        tracing::info!(customer_id = id, "Customer updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Contact, ContactPatch};
    use crate::domain::repositories::{EMAIL_UNIQUE_CONSTRAINT, MockCustomerRepository};
    use crate::error::DUPLICATE_EMAIL_MESSAGE;
    use chrono::Utc;

    fn create_test_customer(id: i64, name: &str, phone: &str, email: &str) -> Customer {
        Customer::new(
            id,
            name.to_string(),
            Some(Contact {
                phone: Some(phone.to_string()),
                email: Some(email.to_string()),
            }),
            Utc::now(),
            Utc::now(),
        )
    }

    fn new_customer() -> NewCustomer {
        NewCustomer {
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_customer_success() {
        let mut mock_repo = MockCustomerRepository::new();

        let created = create_test_customer(1, "Ada", "555-0100", "ada@example.com");
        mock_repo
            .expect_create()
            .withf(|n| n.email == "ada@example.com")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = CustomerService::new(Arc::new(mock_repo));

        let customer = service.create_customer(new_customer()).await.unwrap();

        assert_eq!(customer.id, 1);
        assert_eq!(customer.name, "Ada");
    }

    #[tokio::test]
    async fn test_create_customer_duplicate_email() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(RepositoryError::UniqueViolation {
                constraint: Some(EMAIL_UNIQUE_CONSTRAINT.to_string()),
            })
        });

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service.create_customer(new_customer()).await;

        assert_eq!(result.unwrap_err(), AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
    }

    #[tokio::test]
    async fn test_create_customer_database_error() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(RepositoryError::Database("connection refused".to_string())));

        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service.create_customer(new_customer()).await;

        assert_eq!(result.unwrap_err(), AppError::internal("connection refused"));
    }

    #[tokio::test]
    async fn test_update_customer_empty_patch_skips_repository() {
        let mock_repo = MockCustomerRepository::new();
        let service = CustomerService::new(Arc::new(mock_repo));

        let result = service.update_customer(1, CustomerPatch::default()).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_customer_not_found() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = CustomerService::new(Arc::new(mock_repo));

        let patch = CustomerPatch {
            name: Some("Ghost".to_string()),
            contact: None,
        };
        let result = service.update_customer(42, patch).await;

        assert_eq!(
            result.unwrap_err(),
            AppError::not_found(CUSTOMER_NOT_FOUND_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_update_customer_persists_merged_record() {
        let mut mock_repo = MockCustomerRepository::new();

        let existing = create_test_customer(3, "Ada", "555-0100", "ada@example.com");
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_update()
            .withf(|id, c| {
                let contact = c.contact.as_ref().unwrap();
                *id == 3
                    && c.name == "Ada"
                    && contact.phone.as_deref() == Some("555-0100")
                    && contact.email.as_deref() == Some("new@x.com")
            })
            .times(1)
            .returning(|_, c| Ok(c.clone()));

        let service = CustomerService::new(Arc::new(mock_repo));

        let patch = CustomerPatch {
            name: None,
            contact: Some(ContactPatch {
                phone: None,
                email: Some("new@x.com".to_string()),
            }),
        };
        let updated = service.update_customer(3, patch).await.unwrap();

        assert_eq!(
            updated.contact.unwrap().email.as_deref(),
            Some("new@x.com")
        );
    }

    #[tokio::test]
    async fn test_update_customer_fetch_failure_is_internal() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(RepositoryError::Database("pool timed out".to_string())));

        let service = CustomerService::new(Arc::new(mock_repo));

        let patch = CustomerPatch {
            name: Some("New Name".to_string()),
            contact: None,
        };
        let result = service.update_customer(1, patch).await;

        assert_eq!(result.unwrap_err(), AppError::internal("pool timed out"));
    }

    #[tokio::test]
    async fn test_update_customer_deleted_before_write() {
        let mut mock_repo = MockCustomerRepository::new();

        let existing = create_test_customer(5, "Ada", "555-0100", "ada@example.com");
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let service = CustomerService::new(Arc::new(mock_repo));

        let patch = CustomerPatch {
            name: Some("New Name".to_string()),
            contact: None,
        };
        let result = service.update_customer(5, patch).await;

        assert_eq!(
            result.unwrap_err(),
            AppError::not_found(CUSTOMER_NOT_FOUND_MESSAGE)
        );
    }
}
