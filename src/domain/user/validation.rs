//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Id must be greater than zero")]
    IdNotPositive,

    #[error("Username is required")]
    MissingUsername,
}

/// Validate a lookup/delete identifier
///
/// Rules:
/// - Must be strictly positive
pub fn validate_user_id(id: i64) -> Result<(), UserValidationError> {
    if id <= 0 {
        return Err(UserValidationError::IdNotPositive);
    }

    Ok(())
}

/// Validate a username for creation
///
/// Rules:
/// - Must be present
/// - Must be non-empty after trimming surrounding whitespace
pub fn validate_username(username: Option<&str>) -> Result<(), UserValidationError> {
    match username {
        Some(name) if !name.trim().is_empty() => Ok(()),
        _ => Err(UserValidationError::MissingUsername),
    }
}
