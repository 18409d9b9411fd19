//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. The only behaviour they carry is the
//! field-level merge applied when a customer is partially updated.
//!
//! # Entity Types
//!
//! - [`Customer`] - A customer record with an optional [`Contact`]
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewCustomer` - For creating new records
//! - `CustomerPatch` / `ContactPatch` - For partial updates

pub mod customer;

pub use customer::{Contact, ContactPatch, Customer, CustomerPatch, NewCustomer};
