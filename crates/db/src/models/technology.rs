//! Technology models and DTOs.

use appdash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `technologies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Technology {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub color: String,
    pub icon: Option<String>,
    pub website_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating or fully replacing a technology.
///
/// Omitted optional fields are treated as explicit defaults/nulls, never as
/// "leave unchanged".
#[derive(Debug, Clone, Deserialize)]
pub struct TechnologyInput {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Technology summary embedded in project list/detail rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyRef {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub color: String,
    pub icon: Option<String>,
    pub website_url: Option<String>,
}
