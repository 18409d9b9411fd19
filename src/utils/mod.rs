//! Shared helpers.
//!
//! - [`db_error`] - Mapping of database driver errors to repository error kinds

pub mod db_error;
