//! In-memory note repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::note::{Note, NoteRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// In-memory implementation of NoteRepository
#[derive(Debug, Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<HashMap<String, Note>>>,
}

impl InMemoryNoteRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial notes
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let notes_map = notes
            .into_iter()
            .map(|n| (n.id().as_str().to_string(), n))
            .collect();

        Self {
            notes: Arc::new(RwLock::new(notes_map)),
        }
    }

    /// Insert a note. The user service treats notes as read-only; this is
    /// how a note-handling surface (or a test) populates the collection.
    pub async fn insert(&self, note: Note) {
        let mut notes = self.notes.write().await;
        notes.insert(note.id().as_str().to_string(), note);
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Note>, DomainError> {
        let notes = self.notes.read().await;

        Ok(notes
            .values()
            .filter(|n| n.user() == user_id)
            .cloned()
            .collect())
    }
}
