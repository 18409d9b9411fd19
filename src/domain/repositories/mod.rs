//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customer create, lookup, and update

pub mod customer_repository;

pub use customer_repository::{CustomerRepository, EMAIL_UNIQUE_CONSTRAINT, RepositoryError};

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
