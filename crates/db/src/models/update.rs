//! Project update (changelog entry) models.

use appdash_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `updates` table joined with its project's name and slug.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectUpdate {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub content: String,
    pub version: Option<String>,
    pub update_type: String,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_name: Option<String>,
    pub project_slug: Option<String>,
}
