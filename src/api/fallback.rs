//! Content-negotiated 404 fallback for unmatched routes

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

const NOT_FOUND_MESSAGE: &str = "404 Error, Resources not found";

const NOT_FOUND_HTML: &str = "<!DOCTYPE html>\n<html>\n<head><title>404 Not Found</title></head>\n\
<body><h1>404</h1><p>404 Error, Resources not found</p></body>\n</html>\n";

/// Unmatched routes answer 404 as HTML, JSON, or plain text depending on
/// the Accept header.
pub async fn not_found(headers: HeaderMap) -> Response {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("*/*");

    if accept.contains("text/html") {
        (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
    } else if accept.contains("application/json") || accept.contains("*/*") {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": NOT_FOUND_MESSAGE })),
        )
            .into_response()
    } else {
        (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
    }
}
