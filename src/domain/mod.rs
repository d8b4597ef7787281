//! Domain layer - Core business logic and entities

pub mod error;
pub mod note;
pub mod user;

pub use error::DomainError;
pub use note::{Note, NoteId, NoteRepository};
pub use user::{User, UserId, UserRepository};
