//! Integration models and DTOs.
//!
//! Integrations describe infrastructure/service status for the public
//! status panel; they are independent of projects.

use appdash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `integrations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Integration {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub url: String,
    pub icon: Option<String>,
    pub status: String,
    pub version: Option<String>,
    pub last_checked: Option<Timestamp>,
    pub enabled: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating or fully replacing an integration.
#[derive(Debug, Clone, Deserialize)]
pub struct IntegrationInput {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub last_checked: Option<Timestamp>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}
