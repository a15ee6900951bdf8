//! User service for user management

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{validate_user_id, validate_username, User, UserRepository};
use crate::domain::DomainError;

/// User service for validation and orchestration
///
/// Checks arguments before touching the repository and maps lookup
/// misses to not-found errors. Repository failures pass through
/// unchanged.
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetch a single user by id
    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        validate_user_id(id).map_err(|e| DomainError::invalid_argument(e.to_string()))?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User not found"))
    }

    /// List every known user
    ///
    /// An absent collection from the repository stays absent; it is not
    /// collapsed into an empty list.
    pub async fn list_users(&self) -> Result<Option<Vec<User>>, DomainError> {
        self.repository.find_all().await
    }

    /// Add a new user after validating it
    pub async fn add_user(&self, user: Option<User>) -> Result<(), DomainError> {
        let user = user.ok_or_else(|| DomainError::missing_argument("User must be provided"))?;

        validate_username(user.username.as_deref())
            .map_err(|e| DomainError::invalid_argument(e.to_string()))?;

        info!(user_id = user.id, "Creating user");

        self.repository.create(user).await
    }

    /// Remove a user by id; `true` iff a record was deleted
    pub async fn remove_user(&self, id: i64) -> Result<bool, DomainError> {
        validate_user_id(id).map_err(|e| DomainError::invalid_argument(e.to_string()))?;

        info!(user_id = id, "Deleting user");

        self.repository.delete(id).await
    }
}
