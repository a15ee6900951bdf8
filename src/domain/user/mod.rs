//! User domain
//!
//! This module provides domain types and traits for user management,
//! including the user entity, validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{validate_user_id, validate_username, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
