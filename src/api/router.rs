use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::fallback;
use super::health;
use super::middleware::{error_audit_middleware, request_audit_middleware};
use super::state::AppState;
use super::users;

/// Create the application router with audit middleware attached
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/user",
            get(users::list_users)
                .post(users::create_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/user/{id}", get(users::get_user))
        .fallback(fallback::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            error_audit_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            request_audit_middleware,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Build the CORS layer from the configured allow-list. Origins that do
/// not parse as header values are skipped with a warning.
pub fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cors_layer_skips_bad_origins() {
        // Should not panic on malformed input
        let _ = build_cors_layer(&[
            "http://localhost:3000".to_string(),
            "not a header value\u{0}".to_string(),
        ]);
    }
}
