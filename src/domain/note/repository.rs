//! Note repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Note;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Read-only access to the persisted note collection. The user management
/// service only ever looks notes up by owner, to guard deletion.
#[async_trait]
pub trait NoteRepository: Send + Sync + Debug {
    /// Find all notes owned by the given user
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Note>, DomainError>;
}
