//! Application state for shared services

use std::sync::Arc;

use crate::domain::note::NoteRepository;
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::audit::AuditLog;
use crate::infrastructure::user::{
    CreateUserRequest, PasswordHasher, UpdateUserRequest, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub audit_log: AuditLog,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>, audit_log: AuditLog) -> Self {
        Self {
            user_service,
            audit_log,
        }
    }
}

/// Trait for user management operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<User, DomainError>;
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: &str) -> Result<User, DomainError>;
}

#[async_trait::async_trait]
impl<R, N, H> UserServiceTrait for UserService<R, N, H>
where
    R: UserRepository,
    N: NoteRepository,
    H: PasswordHasher,
{
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: &str) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: &str) -> Result<User, DomainError> {
        UserService::delete(self, id).await
    }
}
