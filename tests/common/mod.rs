#![allow(dead_code)]

use axum_test::TestServer;
use customer_service::infrastructure::persistence::PgCustomerRepository;
use customer_service::routes::router;
use customer_service::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Inserts a customer with a full contact and returns its id.
pub async fn create_test_customer(pool: &PgPool, name: &str, phone: &str, email: &str) -> i64 {
    let id: i64 = sqlx::query_scalar("INSERT INTO customers (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();

    sqlx::query("INSERT INTO contacts (customer_id, phone, email) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(phone)
        .bind(email)
        .execute(pool)
        .await
        .unwrap();

    id
}

/// Inserts a customer without any contact row and returns its id.
pub async fn create_customer_without_contact(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO customers (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_customers(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let repository = Arc::new(PgCustomerRepository::new(pool.clone()));
    AppState::new(repository, Some(pool))
}

/// Application routes with the tracing middleware.
pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}
