//! User Registry
//!
//! A user management core: a validating service layer over a pluggable
//! user repository. The crate provides:
//! - The [`User`] entity and the [`UserRepository`] storage trait
//! - [`UserService`], which validates arguments and orchestrates calls
//! - [`InMemoryUserRepository`], a map-backed store for tests and embedders
//!
//! Transports, durable stores, and the tracing subscriber belong to
//! embedding applications; this crate only emits events through the
//! `tracing` macros.

pub mod domain;
pub mod infrastructure;

pub use domain::{DomainError, User, UserRepository};
pub use infrastructure::user::{InMemoryUserRepository, UserService};
