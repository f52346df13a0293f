//! Shared domain types for the portfolio dashboard backend.
//!
//! Holds the primitives every other crate depends on: ID/timestamp aliases,
//! the domain error enum, and the fixed field taxonomies (categories,
//! statuses, update types) with their validation helpers.

pub mod error;
pub mod taxonomy;
pub mod types;
