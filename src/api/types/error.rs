//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::DomainError;

/// JSON error body returned to clients. `details` carries structured
/// context when there is any - field violations for bad input, the
/// blocking notes for a refused delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Internal error detail attached to 5xx responses as an extension, so the
/// error-audit middleware can log the real cause while the client only
/// sees a generic message.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub name: &'static str,
    pub message: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
    context: ErrorContext,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, name: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status,
            response: ApiErrorResponse {
                message: message.clone(),
                details: None,
            },
            context: ErrorContext { name, message },
        }
    }

    /// Attach a structured details payload
    pub fn with_details(mut self, details: Value) -> Self {
        self.response.details = Some(details);
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "ValidationError", message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NotFoundError", message)
    }

    /// Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "ConflictError", message)
    }

    /// Internal server error. The detail goes to the error log; the
    /// client body is generic.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            response: ApiErrorResponse {
                message: "Internal server error".to_string(),
                details: None,
            },
            context: ErrorContext {
                name: "InternalError",
                message: detail.into(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.response)).into_response();
        response.extensions_mut().insert(self.context);
        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let name = err.name();
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message, details } => {
                let api = Self::new(StatusCode::BAD_REQUEST, name, message);
                if details.is_null() {
                    api
                } else {
                    api.with_details(details)
                }
            }
            DomainError::InvalidId { message } => {
                Self::new(StatusCode::BAD_REQUEST, name, message)
            }
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Integrity { message, details } => {
                Self::new(StatusCode::BAD_REQUEST, name, message).with_details(details)
            }
            DomainError::Internal { message } | DomainError::Storage { message } => {
                Self::internal(message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context.name, self.response.message)
    }
}

impl std::error::Error for ApiError {}
