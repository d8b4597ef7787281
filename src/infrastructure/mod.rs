//! Infrastructure layer - repository implementations, hashing, logging

pub mod audit;
pub mod logging;
pub mod note;
pub mod user;
