//! Error audit middleware
//!
//! Centralized counterpart to the request audit: when a response leaves
//! with a server error status, the internal detail stashed by `ApiError`
//! is appended to the error log along with the request's origin header.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::api::types::ErrorContext;

use super::logging::header_or_dash;

pub async fn error_audit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let origin = header_or_dash(&request, header::ORIGIN.as_str());

    let response = next.run(request).await;

    if response.status().is_server_error() {
        match response.extensions().get::<ErrorContext>() {
            Some(ctx) => state.audit_log.error(ctx.name, &ctx.message, &origin),
            None => state
                .audit_log
                .error("InternalError", "Unhandled server error", &origin),
        }
    }

    response
}
