//! User repository trait

use async_trait::async_trait;

use super::entity::User;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Storage contract for user records
///
/// Implementations own persistence and identity; no argument validation
/// happens at this seam. Every method may fail with an
/// implementation-defined error, and callers upstream surface it
/// untouched.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks up a user by identifier; `None` when no record matches
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Lists all known users, in no particular order
    ///
    /// The collection itself may be absent: implementations backed by
    /// stores that distinguish "no list" from "an empty list" report
    /// `None`, and that distinction is preserved all the way up.
    async fn find_all(&self) -> Result<Option<Vec<User>>, DomainError>;

    /// Persists a new record
    async fn create(&self, user: User) -> Result<(), DomainError>;

    /// Removes a record; `true` iff a matching record existed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_user_repository() {
        let mut mock = MockUserRepository::new();

        mock.expect_find_all().returning(|| Ok(Some(vec![])));

        let result = mock.find_all().await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Some(vec![]));
    }
}
