//! Request audit middleware
//!
//! Observes every inbound request and hands a log entry to the audit
//! writer before dispatching to the handler. Never blocks or fails the
//! request.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::api::state::AppState;
use crate::infrastructure::audit::RequestEntry;

/// Header value or `-` when absent or non-UTF8.
pub(super) fn header_or_dash(request: &Request<Body>, name: &str) -> String {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

fn remote_addr(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub async fn request_audit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let entry = RequestEntry {
        method: request.method().to_string(),
        uri: request.uri().to_string(),
        origin: header_or_dash(&request, header::ORIGIN.as_str()),
        remote_addr: remote_addr(&request),
        platform: header_or_dash(&request, "sec-ch-ua-platform"),
        user_agent: header_or_dash(&request, header::USER_AGENT.as_str()),
    };

    state.audit_log.request(entry);

    next.run(request).await
}
