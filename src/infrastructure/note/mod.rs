//! Note infrastructure module

mod repository;

pub use repository::InMemoryNoteRepository;
