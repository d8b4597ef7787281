//! User management service
//!
//! Orchestrates the user repository, the note repository (referential
//! integrity guard), and the password hasher to implement the five user
//! operations.

use std::sync::Arc;

use tracing::debug;

use crate::domain::note::NoteRepository;
use crate::domain::user::{
    validate_new_user, validate_password, validate_roles, validate_username, User, UserId,
    UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for creating a new user. The active flag is `None` when the
/// caller did not supply one; validation rejects that alongside the other
/// field violations.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub roles: Vec<String>,
    pub active: Option<bool>,
}

/// Request for updating a user; absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub roles: Option<Vec<String>>,
    pub active: Option<bool>,
}

/// User management service
#[derive(Debug)]
pub struct UserService<R: UserRepository, N: NoteRepository, H: PasswordHasher> {
    users: Arc<R>,
    notes: Arc<N>,
    hasher: Arc<H>,
}

impl<R: UserRepository, N: NoteRepository, H: PasswordHasher> UserService<R, N, H> {
    /// Create a new user service
    pub fn new(users: Arc<R>, notes: Arc<N>, hasher: Arc<H>) -> Self {
        Self {
            users,
            notes,
            hasher,
        }
    }

    /// List all users. An empty collection is a valid outcome here; the
    /// HTTP layer maps it to its own response.
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.users.list().await
    }

    /// Get a user by id. Malformed ids are rejected before any lookup.
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;

        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("No User found"))
    }

    /// Create a user: validate all fields, reject duplicate usernames,
    /// hash the password, persist.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        if let Err(violations) = validate_new_user(
            &request.username,
            &request.password,
            &request.roles,
            request.active,
        ) {
            return Err(DomainError::validation_details(
                "All fields are required",
                serde_json::to_value(violations).unwrap_or_default(),
            ));
        }

        if self.users.username_exists(&request.username).await? {
            return Err(DomainError::conflict(format!(
                "Duplicate username found, '{}' already exists",
                request.username
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        // Validation guarantees the flag is present at this point.
        let user = User::new(
            UserId::generate(),
            &request.username,
            password_hash,
            request.roles,
            request.active.unwrap_or(true),
        );

        debug!(id = %user.id(), username = %user.username(), "Creating user");

        self.users.create(user).await
    }

    /// Update a user: apply the supplied fields, re-hashing the password
    /// only when a new plaintext one is provided.
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;

        let mut user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("No User found"))?;

        if let Some(username) = request.username {
            validate_username(&username).map_err(|e| DomainError::validation(e.to_string()))?;

            // Collision check only applies when the username actually changes;
            // re-submitting the current one is a no-op, not a conflict.
            if username != user.username() {
                if self.users.username_exists(&username).await? {
                    return Err(DomainError::conflict(
                        "Username already exists in database, please change username",
                    ));
                }
                user.set_username(username);
            }
        }

        if let Some(roles) = request.roles {
            validate_roles(&roles).map_err(|e| DomainError::validation(e.to_string()))?;
            user.set_roles(roles);
        }

        if let Some(active) = request.active {
            user.set_active(active);
        }

        if let Some(password) = request.password {
            validate_password(&password).map_err(|e| DomainError::validation(e.to_string()))?;
            let hash = self.hasher.hash(&password)?;
            user.set_password_hash(hash);
        }

        debug!(id = %user.id(), "Updating user");

        self.users.save(&user).await
    }

    /// Delete a user, refusing while any note still references it.
    /// Returns the deleted record so callers can report the username.
    pub async fn delete(&self, id: &str) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;

        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("No User found"))?;

        let notes = self.notes.find_by_user(&user_id).await?;
        if !notes.is_empty() {
            return Err(DomainError::integrity(
                "This user associated with note",
                serde_json::to_value(&notes).unwrap_or_default(),
            ));
        }

        debug!(id = %user.id(), username = %user.username(), "Deleting user");

        self.users.delete(&user_id).await?;

        Ok(user)
    }
}

fn parse_id(id: &str) -> Result<UserId, DomainError> {
    UserId::new(id).map_err(|_| DomainError::invalid_id("ID you provided is not valid"))
}
