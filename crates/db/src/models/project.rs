//! Project models and DTOs.

use appdash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::technology::TechnologyRef;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub long_description: Option<String>,
    pub live_url: String,
    pub source_url: String,
    pub image_url: Option<String>,
    pub status: String,
    pub featured: bool,
    pub sort_order: i32,
    pub architecture_diagram: Option<String>,
    pub architecture_code: Option<String>,
    pub tech_stack_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row joined with its linked technologies.
///
/// `technologies` is aggregated in SQL and is always an array -- empty when
/// nothing is linked, never null.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithTechnologies {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub long_description: Option<String>,
    pub live_url: String,
    pub source_url: String,
    pub image_url: Option<String>,
    pub status: String,
    pub featured: bool,
    pub sort_order: i32,
    pub architecture_diagram: Option<String>,
    pub architecture_code: Option<String>,
    pub tech_stack_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub technologies: Json<Vec<TechnologyRef>>,
}

/// Payload for creating or fully replacing a project.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    pub live_url: String,
    pub source_url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub architecture_diagram: Option<String>,
    #[serde(default)]
    pub architecture_code: Option<String>,
    #[serde(default)]
    pub tech_stack_description: Option<String>,
}

/// Identifying fields returned by project create/update.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
