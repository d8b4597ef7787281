//! Note domain - entity and read-only repository trait

mod entity;
mod repository;

pub use entity::{Note, NoteId};
pub use repository::NoteRepository;
