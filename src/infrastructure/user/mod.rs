//! User infrastructure module
//!
//! This module provides implementations for user management, including
//! the in-memory repository and the user service.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
