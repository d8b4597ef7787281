//! Shared API types

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ErrorContext};
pub use json::Json;
