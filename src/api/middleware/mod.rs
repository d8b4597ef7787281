//! API middleware

mod error_log;
mod logging;

pub use error_log::error_audit_middleware;
pub use logging::request_audit_middleware;
