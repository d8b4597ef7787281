//! User input validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Document identifiers are 24 hexadecimal characters. Malformed ids are
/// rejected here, before any repository lookup is attempted.
static HEX_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("hex id pattern is valid"));

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("ID must be a 24-character hexadecimal string")]
    InvalidId,

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),

    #[error("At least one role is required")]
    EmptyRoles,

    #[error("Active flag is required")]
    MissingActive,

    #[error("Role tags cannot be empty")]
    BlankRole,
}

const MAX_USERNAME_LENGTH: usize = 50;
// bcrypt truncates input beyond 72 bytes; reject rather than silently truncate.
const MAX_PASSWORD_LENGTH: usize = 72;

/// Validate a hex-24 document identifier.
pub fn validate_hex_id(id: &str) -> Result<(), UserValidationError> {
    if HEX_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidId)
    }
}

/// Validate a username.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate a plaintext password before hashing.
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooLong(MAX_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate a role list: at least one tag, no blank tags.
pub fn validate_roles(roles: &[String]) -> Result<(), UserValidationError> {
    if roles.is_empty() {
        return Err(UserValidationError::EmptyRoles);
    }

    if roles.iter().any(|r| r.trim().is_empty()) {
        return Err(UserValidationError::BlankRole);
    }

    Ok(())
}

/// A single field violation produced by request validation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, error: &UserValidationError) -> Self {
        Self {
            field,
            message: error.to_string(),
        }
    }
}

/// Validate all fields of a create request at once, collecting every
/// violation instead of stopping at the first. The active flag must be
/// supplied explicitly on create.
pub fn validate_new_user(
    username: &str,
    password: &str,
    roles: &[String],
    active: Option<bool>,
) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if let Err(e) = validate_username(username) {
        violations.push(FieldViolation::new("username", &e));
    }

    if let Err(e) = validate_password(password) {
        violations.push(FieldViolation::new("password", &e));
    }

    if let Err(e) = validate_roles(roles) {
        violations.push(FieldViolation::new("roles", &e));
    }

    if active.is_none() {
        violations.push(FieldViolation::new(
            "active",
            &UserValidationError::MissingActive,
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hex_id() {
        assert!(validate_hex_id("507f1f77bcf86cd799439011").is_ok());
        assert!(validate_hex_id("ABCDEF0123456789abcdef01").is_ok());
    }

    #[test]
    fn test_invalid_hex_id() {
        assert!(validate_hex_id("").is_err());
        assert!(validate_hex_id("507f1f77bcf86cd79943901").is_err()); // 23 chars
        assert!(validate_hex_id("507f1f77bcf86cd7994390111").is_err()); // 25 chars
        assert!(validate_hex_id("507f1f77bcf86cd79943901z").is_err()); // non-hex
        assert!(validate_hex_id("not-an-id").is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert_eq!(
            validate_username(""),
            Err(UserValidationError::EmptyUsername)
        );
        assert!(validate_username(&"a".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret123").is_ok());
        assert_eq!(
            validate_password(""),
            Err(UserValidationError::EmptyPassword)
        );
        assert!(validate_password(&"x".repeat(73)).is_err());
    }

    #[test]
    fn test_validate_roles() {
        assert!(validate_roles(&["Employee".to_string()]).is_ok());
        assert_eq!(validate_roles(&[]), Err(UserValidationError::EmptyRoles));
        assert_eq!(
            validate_roles(&["".to_string()]),
            Err(UserValidationError::BlankRole)
        );
    }

    #[test]
    fn test_validate_new_user_collects_all_violations() {
        let result = validate_new_user("", "", &[], None);
        let violations = result.unwrap_err();

        assert_eq!(violations.len(), 4);
        assert_eq!(violations[0].field, "username");
        assert_eq!(violations[1].field, "password");
        assert_eq!(violations[2].field, "roles");
        assert_eq!(violations[3].field, "active");
    }

    #[test]
    fn test_validate_new_user_missing_active_only() {
        let violations =
            validate_new_user("alice", "secret123", &["Employee".to_string()], None)
                .unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "active");
    }

    #[test]
    fn test_validate_new_user_ok() {
        assert!(
            validate_new_user("alice", "secret123", &["Employee".to_string()], Some(true))
                .is_ok()
        );
    }
}
