//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified HTTP error handling
//! - The JSON response envelope

pub mod error;
pub mod response;

pub use error::{AppError, AppResult};
pub use response::{ApiResponse, Created, NoContent};
