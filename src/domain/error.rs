use serde_json::Value;
use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String, details: Value },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Integrity violation: {message}")]
    Integrity { message: String, details: Value },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: Value::Null,
        }
    }

    /// Validation failure carrying a structured list of field violations.
    pub fn validation_details(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn integrity(message: impl Into<String>, details: Value) -> Self {
        Self::Integrity {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Short error name recorded in the error audit log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFoundError",
            Self::Validation { .. } => "ValidationError",
            Self::InvalidId { .. } => "InvalidIdError",
            Self::Conflict { .. } => "ConflictError",
            Self::Integrity { .. } => "IntegrityError",
            Self::Internal { .. } => "InternalError",
            Self::Storage { .. } => "StorageError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User 'abc' not found");
        assert_eq!(error.to_string(), "Not found: User 'abc' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("All fields are required");
        assert_eq!(
            error.to_string(),
            "Validation error: All fields are required"
        );
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Username already exists");
        assert_eq!(error.to_string(), "Conflict: Username already exists");
    }

    #[test]
    fn test_error_names() {
        assert_eq!(DomainError::not_found("x").name(), "NotFoundError");
        assert_eq!(DomainError::invalid_id("x").name(), "InvalidIdError");
        assert_eq!(
            DomainError::integrity("x", Value::Null).name(),
            "IntegrityError"
        );
        assert_eq!(DomainError::internal("x").name(), "InternalError");
    }
}
