//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Keeps records in a map keyed by id behind an async lock. Intended
/// for tests and embedders that need a store without external state.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut users_map = HashMap::new();

        for user in users {
            users_map.insert(user.id, user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Option<Vec<User>>, DomainError> {
        let users = self.users.read().await;
        Ok(Some(users.values().cloned().collect()))
    }

    async fn create(&self, user: User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(DomainError::repository(format!(
                "User with id {} already exists",
                user.id
            )));
        }

        users.insert(user.id, user);

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = InMemoryUserRepository::new();
        let user = User::new(1, "testuser");

        repository.create(user.clone()).await.unwrap();

        let found = repository.find_by_id(1).await.unwrap();
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_find_missing_id() {
        let repository = InMemoryUserRepository::new();

        let found = repository.find_by_id(42).await.unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repository = InMemoryUserRepository::new();

        repository.create(User::new(1, "first")).await.unwrap();
        let result = repository.create(User::new(1, "second")).await;

        assert!(matches!(result, Err(DomainError::Repository { .. })));

        let found = repository.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.username.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let repository = InMemoryUserRepository::new();
        repository.create(User::new(1, "testuser")).await.unwrap();

        assert!(repository.delete(1).await.unwrap());
        assert!(!repository.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_is_never_absent() {
        let repository = InMemoryUserRepository::new();

        let all = repository.find_all().await.unwrap();
        assert_eq!(all, Some(vec![]));
    }

    #[tokio::test]
    async fn test_with_users() {
        let repository = InMemoryUserRepository::with_users(vec![
            User::new(1, "alice"),
            User::new(2, "bob"),
        ]);

        let mut all = repository.find_all().await.unwrap().unwrap();
        all.sort_by_key(|user| user.id);

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username.as_deref(), Some("alice"));
        assert_eq!(all[1].username.as_deref(), Some("bob"));
    }
}
