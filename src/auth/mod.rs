//! Authentication module for authgate
//!
//! This module orchestrates registration and login against the user
//! store and issues cookie sessions through the session registry.

mod service;
pub mod handlers;

pub use service::AuthService;
