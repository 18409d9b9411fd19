//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - Customer and contact storage

pub mod pg_customer_repository;

pub use pg_customer_repository::PgCustomerRepository;
