//! Password hashing utilities using bcrypt

use std::fmt::Debug;

use crate::domain::DomainError;

/// Fixed bcrypt work factor.
const BCRYPT_COST: u32 = 10;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Bcrypt-based password hasher with cost factor 10
#[derive(Debug, Clone, Default)]
pub struct BcryptHasher;

impl BcryptHasher {
    /// Create a new bcrypt hasher
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
