//! Entity models and request DTOs.
//!
//! Each submodule holds the `FromRow` struct for one table plus the typed
//! payload struct its write endpoints accept. Updates are full replacements,
//! so create and update share a single input struct per resource.

pub mod integration;
pub mod project;
pub mod technology;
pub mod update;
pub mod user;
