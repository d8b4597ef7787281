//! User domain - entity, repository trait, and input validation

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_hex_id, validate_new_user, validate_password, validate_roles, validate_username,
    FieldViolation, UserValidationError,
};
