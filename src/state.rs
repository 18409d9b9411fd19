//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::CustomerService;
use crate::domain::repositories::CustomerRepository;

/// Handler state. Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService<dyn CustomerRepository>>,
    /// Pool handle used by the health check. `None` when the state is built
    /// around a non-database repository, as in handler unit tests.
    pub db: Option<Arc<PgPool>>,
}

impl AppState {
    /// Creates state around a repository implementation.
    pub fn new(repository: Arc<dyn CustomerRepository>, db: Option<Arc<PgPool>>) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(repository)),
            db,
        }
    }
}
