//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Customer creation and partial updates

pub mod services;
