//! Repository for the `integrations` table.

use appdash_core::taxonomy::DEFAULT_INTEGRATION_STATUS;
use appdash_core::types::DbId;
use sqlx::PgPool;

use crate::models::integration::{Integration, IntegrationInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, slug, description, url, icon, status, version, \
    last_checked, enabled, sort_order, created_at, updated_at";

/// Provides CRUD operations for integrations.
pub struct IntegrationRepo;

impl IntegrationRepo {
    /// List all integrations ordered by sort order ascending, then by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Integration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM integrations ORDER BY sort_order ASC, name ASC");
        sqlx::query_as::<_, Integration>(&query).fetch_all(pool).await
    }

    /// Find an integration by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Integration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM integrations WHERE id = $1");
        sqlx::query_as::<_, Integration>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new integration, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &IntegrationInput,
    ) -> Result<Integration, sqlx::Error> {
        let query = format!(
            "INSERT INTO integrations ( \
                name, slug, description, url, icon, status, version, \
                last_checked, enabled, sort_order \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Integration>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_INTEGRATION_STATUS))
            .bind(&input.version)
            .bind(input.last_checked)
            .bind(input.enabled.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_one(pool)
            .await
    }

    /// Fully replace an integration's mutable fields and touch `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &IntegrationInput,
    ) -> Result<Option<Integration>, sqlx::Error> {
        let query = format!(
            "UPDATE integrations SET \
                name = $2, slug = $3, description = $4, url = $5, icon = $6, \
                status = $7, version = $8, last_checked = $9, enabled = $10, \
                sort_order = $11, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Integration>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.icon)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_INTEGRATION_STATUS))
            .bind(&input.version)
            .bind(input.last_checked)
            .bind(input.enabled.unwrap_or(true))
            .bind(input.sort_order.unwrap_or(0))
            .fetch_optional(pool)
            .await
    }

    /// Delete an integration by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM integrations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
