//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource or
//! endpoint group. Handlers validate the typed payload, delegate to the
//! corresponding repository in `appdash_db`, and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod commits;
pub mod integrations;
pub mod maintenance;
pub mod metadata;
pub mod projects;
pub mod technologies;
pub mod updates;
