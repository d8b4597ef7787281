//! User infrastructure module
//!
//! Password hashing with bcrypt, the in-memory user repository, and the
//! user management service.

mod password;
mod repository;
mod service;

pub use password::{BcryptHasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
