//! Infrastructure layer - External service implementations

pub mod user;
