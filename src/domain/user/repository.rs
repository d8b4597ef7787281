//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Repository trait for the persisted user collection.
///
/// Single-record accessors return `Option<User>`; absence is always `None`,
/// never an empty list, so callers need exactly one existence check.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Find a user by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by username (duplicate detection)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// List all users; an empty result is a valid outcome at this layer
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist mutations to an existing user
    async fn save(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a user, returning whether a record was removed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a username is taken
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
