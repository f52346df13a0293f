//! Repository for the `technologies` table.

use appdash_core::taxonomy::{DEFAULT_TECHNOLOGY_CATEGORY, DEFAULT_TECHNOLOGY_COLOR};
use appdash_core::types::DbId;
use sqlx::PgPool;

use crate::models::technology::{Technology, TechnologyInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, slug, category, color, icon, website_url, active, \
    created_at, updated_at";

/// Provides CRUD operations for technologies.
pub struct TechnologyRepo;

impl TechnologyRepo {
    /// List all technologies grouped by category, then by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Technology>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technologies ORDER BY category ASC, name ASC");
        sqlx::query_as::<_, Technology>(&query).fetch_all(pool).await
    }

    /// Find a technology by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Technology>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technologies WHERE id = $1");
        sqlx::query_as::<_, Technology>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new technology, returning the created row.
    pub async fn create(pool: &PgPool, input: &TechnologyInput) -> Result<Technology, sqlx::Error> {
        let query = format!(
            "INSERT INTO technologies (name, slug, category, color, icon, website_url, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technology>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_TECHNOLOGY_CATEGORY))
            .bind(input.color.as_deref().unwrap_or(DEFAULT_TECHNOLOGY_COLOR))
            .bind(&input.icon)
            .bind(&input.website_url)
            .bind(input.active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Fully replace a technology's mutable fields and touch `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TechnologyInput,
    ) -> Result<Option<Technology>, sqlx::Error> {
        let query = format!(
            "UPDATE technologies SET \
                name = $2, slug = $3, category = $4, color = $5, \
                icon = $6, website_url = $7, active = $8, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technology>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.category.as_deref().unwrap_or(DEFAULT_TECHNOLOGY_CATEGORY))
            .bind(input.color.as_deref().unwrap_or(DEFAULT_TECHNOLOGY_COLOR))
            .bind(&input.icon)
            .bind(&input.website_url)
            .bind(input.active.unwrap_or(true))
            .fetch_optional(pool)
            .await
    }

    /// Count how many project links reference this technology.
    ///
    /// The delete path refuses to remove a technology while this is nonzero.
    pub async fn usage_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM project_technologies WHERE technology_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a technology by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM technologies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
