//! PostgreSQL implementation of customer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::{Contact, Customer, NewCustomer};
use crate::domain::repositories::{CustomerRepository, RepositoryError};

const SELECT_CUSTOMER: &str = r#"
    SELECT c.id, c.name, c.created_at, c.updated_at,
           ct.id AS contact_id, ct.phone, ct.email
    FROM customers c
    LEFT JOIN contacts ct ON ct.customer_id = c.id
    WHERE c.id = $1
"#;

/// Flat row produced by [`SELECT_CUSTOMER`].
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    contact_id: Option<i64>,
    phone: Option<String>,
    email: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        let contact = r.contact_id.map(|_| Contact {
            phone: r.phone,
            email: r.email,
        });

        Customer::new(r.id, r.name, contact, r.created_at, r.updated_at)
    }
}

/// PostgreSQL repository for customers.
///
/// A customer spans two tables (`customers` and `contacts`); every write that
/// touches both runs in a single transaction.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        id: i64,
    ) -> Result<Customer, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(SELECT_CUSTOMER)
            .bind(id)
            .fetch_one(&mut **tx)
            .await?;

        Ok(row.into())
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 =
            sqlx::query_scalar::<_, i64>("INSERT INTO customers (name) VALUES ($1) RETURNING id")
                .bind(&new_customer.name)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query("INSERT INTO contacts (customer_id, phone, email) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(&new_customer.phone)
            .bind(&new_customer.email)
            .execute(&mut *tx)
            .await?;

        let customer = Self::fetch_in_tx(&mut tx, id).await?;

        tx.commit().await?;
        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, RepositoryError> {
        let row = sqlx::query_as::<_, CustomerRow>(SELECT_CUSTOMER)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Customer::from))
    }

    async fn update(&self, id: i64, customer: &Customer) -> Result<Customer, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE customers SET
                name       = $2,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&customer.name)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(RepositoryError::NotFound);
        }

        if let Some(contact) = &customer.contact {
            sqlx::query(
                r#"
                INSERT INTO contacts (customer_id, phone, email)
                VALUES ($1, $2, $3)
                ON CONFLICT (customer_id) DO UPDATE SET
                    phone = EXCLUDED.phone,
                    email = EXCLUDED.email
                "#,
            )
            .bind(id)
            .bind(&contact.phone)
            .bind(&contact.email)
            .execute(&mut *tx)
            .await?;
        }

        let updated = Self::fetch_in_tx(&mut tx, id).await?;

        tx.commit().await?;
        Ok(updated)
    }
}
