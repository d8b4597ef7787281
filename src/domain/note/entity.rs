//! Note entity
//!
//! Notes are owned by users. This service never mutates them; they are read
//! only to guard user deletion.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::domain::user::{validate_hex_id, UserId, UserValidationError};

/// Note identifier - a 24-character hexadecimal string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_hex_id(&id)?;
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Generate a fresh identifier from 12 random bytes.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NoteId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NoteId> for String {
    fn from(id: NoteId) -> Self {
        id.0
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Note entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    /// Owning user
    user: UserId,
    title: String,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(
        id: NoteId,
        user: UserId,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user,
            title: title.into(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }
}
