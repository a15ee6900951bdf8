//! User entity

use serde::{Deserialize, Serialize};

/// A single account record.
///
/// The record is deliberately plain: every rule about what makes an id or
/// username acceptable lives in the service layer, and the repository
/// that returned a record owns its identity and lifetime. A missing
/// username (`None`) is representable and distinct from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Integer identifier; positive for any persisted user.
    pub id: i64,
    /// Login name; absent when the backing store has no value for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl User {
    /// Create a record with a username.
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: Some(username.into()),
        }
    }
}
