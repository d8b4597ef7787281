//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    /// Index for username -> user ID lookup
    username_index: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut users_map = HashMap::new();
        let mut username_map = HashMap::new();

        for user in users {
            let id = user.id().as_str().to_string();
            username_map.insert(user.username().to_string(), id.clone());
            users_map.insert(id, user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
            username_index: Arc::new(RwLock::new(username_map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id.as_str()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let username_index = self.username_index.read().await;

        if let Some(user_id) = username_index.get(username) {
            let users = self.users.read().await;
            return Ok(users.get(user_id).cloned());
        }

        Ok(None)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let mut result: Vec<User> = users.values().cloned().collect();
        // Stable output order for clients and tests
        result.sort_by(|a, b| a.created_at().cmp(&b.created_at()));

        Ok(result)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut username_index = self.username_index.write().await;

        let id = user.id().as_str().to_string();
        let username = user.username().to_string();

        if users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        if username_index.contains_key(&username) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                username
            )));
        }

        username_index.insert(username, id.clone());
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut username_index = self.username_index.write().await;

        let id = user.id().as_str().to_string();

        let Some(old_user) = users.get(&id) else {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        };

        // If the username changed, enforce uniqueness and update the index
        let old_username = old_user.username().to_string();
        let new_username = user.username().to_string();

        if old_username != new_username {
            if username_index.contains_key(&new_username) {
                return Err(DomainError::conflict(format!(
                    "Username '{}' already exists",
                    new_username
                )));
            }

            username_index.remove(&old_username);
            username_index.insert(new_username, id.clone());
        }

        users.insert(id, user.clone());

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let mut username_index = self.username_index.write().await;

        if let Some(user) = users.remove(id.as_str()) {
            username_index.remove(user.username());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: &str, username: &str) -> User {
        let user_id = UserId::new(id).unwrap();
        User::new(
            user_id,
            username,
            "hashed_password",
            vec!["Employee".to_string()],
            true,
        )
    }

    const ID_1: &str = "507f1f77bcf86cd799439011";
    const ID_2: &str = "507f1f77bcf86cd799439012";

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user(ID_1, "alice");

        repo.create(user.clone()).await.unwrap();

        let retrieved = repo.find_by_id(user.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().username(), "alice");
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user(ID_1, "alice");

        repo.create(user).await.unwrap();

        let retrieved = repo.find_by_username("alice").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id().as_str(), ID_1);

        let not_found = repo.find_by_username("nonexistent").await.unwrap();
        assert!(not_found.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_test_user(ID_1, "alice")).await.unwrap();

        let result = repo.create(create_test_user(ID_1, "bob")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_username() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_test_user(ID_1, "alice")).await.unwrap();

        let result = repo.create(create_test_user(ID_2, "alice")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_save_updates_username_index() {
        let repo = InMemoryUserRepository::new();
        let mut user = create_test_user(ID_1, "alice");

        repo.create(user.clone()).await.unwrap();

        user.set_username("alice2");
        repo.save(&user).await.unwrap();

        let retrieved = repo.find_by_id(user.id()).await.unwrap().unwrap();
        assert_eq!(retrieved.username(), "alice2");

        // Old username no longer resolves
        assert!(repo.find_by_username("alice").await.unwrap().is_none());
        assert!(repo.find_by_username("alice2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_save_username_conflict() {
        let repo = InMemoryUserRepository::new();
        let mut user2 = create_test_user(ID_2, "bob");

        repo.create(create_test_user(ID_1, "alice")).await.unwrap();
        repo.create(user2.clone()).await.unwrap();

        user2.set_username("alice");

        let result = repo.save(&user2).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_save_missing_user() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user(ID_1, "alice");

        let result = repo.save(&user).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let user = create_test_user(ID_1, "alice");

        repo.create(user.clone()).await.unwrap();

        let deleted = repo.delete(user.id()).await.unwrap();
        assert!(deleted);

        assert!(repo.find_by_id(user.id()).await.unwrap().is_none());

        // Username index entry removed as well
        assert!(repo.find_by_username("alice").await.unwrap().is_none());

        // Second delete reports nothing removed
        assert!(!repo.delete(user.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let repo = InMemoryUserRepository::new();

        assert!(repo.list().await.unwrap().is_empty());

        repo.create(create_test_user(ID_1, "alice")).await.unwrap();
        repo.create(create_test_user(ID_2, "bob")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_with_users() {
        let repo = InMemoryUserRepository::with_users(vec![
            create_test_user(ID_1, "alice"),
            create_test_user(ID_2, "bob"),
        ]);

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.find_by_username("alice").await.unwrap().is_some());
    }
}
