//! Database module for authgate
//!
//! This module handles database connections and the data access
//! layer for user records.

pub mod models;
pub mod operations;

pub use models::User;
pub use operations::DbOperations;
