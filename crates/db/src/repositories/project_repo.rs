//! Repository for the `projects` table and its technology links.
//!
//! List and detail queries aggregate the linked technologies into a JSON
//! array in SQL, so the handler layer never issues N+1 lookups.

use appdash_core::taxonomy::DEFAULT_PROJECT_STATUS;
use appdash_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{ProjectInput, ProjectSummary, ProjectWithTechnologies};

/// Project columns selected by the aggregate queries.
const PROJECT_COLUMNS: &str = "\
    p.id, p.name, p.slug, p.description, p.long_description, \
    p.live_url, p.source_url, p.image_url, p.status, p.featured, \
    p.sort_order, p.architecture_diagram, p.architecture_code, \
    p.tech_stack_description, p.created_at, p.updated_at";

/// JSON aggregation of linked technologies; `[]` when none are linked.
const TECHNOLOGIES_AGG: &str = "\
    COALESCE( \
        json_agg( \
            json_build_object( \
                'id', t.id, \
                'name', t.name, \
                'slug', t.slug, \
                'category', t.category, \
                'color', t.color, \
                'icon', t.icon, \
                'website_url', t.website_url \
            ) \
        ) FILTER (WHERE t.id IS NOT NULL), \
        '[]'::json \
    ) AS technologies";

/// Identifying fields returned from create/update.
const SUMMARY_COLUMNS: &str = "id, name, slug, description, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects with their technologies, ordered by sort order
    /// ascending, newest first as tiebreak.
    pub async fn list_with_technologies(
        pool: &PgPool,
    ) -> Result<Vec<ProjectWithTechnologies>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS}, {TECHNOLOGIES_AGG} \
             FROM projects p \
             LEFT JOIN project_technologies pt ON p.id = pt.project_id \
             LEFT JOIN technologies t ON pt.technology_id = t.id \
             GROUP BY p.id \
             ORDER BY p.sort_order ASC, p.created_at DESC"
        );
        sqlx::query_as::<_, ProjectWithTechnologies>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one project with its technologies. Returns `None` if absent.
    pub async fn find_by_id_with_technologies(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithTechnologies>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS}, {TECHNOLOGIES_AGG} \
             FROM projects p \
             LEFT JOIN project_technologies pt ON p.id = pt.project_id \
             LEFT JOIN technologies t ON pt.technology_id = t.id \
             WHERE p.id = $1 \
             GROUP BY p.id"
        );
        sqlx::query_as::<_, ProjectWithTechnologies>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new project, returning its identifying fields.
    pub async fn create(pool: &PgPool, input: &ProjectInput) -> Result<ProjectSummary, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects ( \
                name, slug, description, long_description, live_url, source_url, \
                image_url, status, featured, sort_order, architecture_diagram, \
                architecture_code, tech_stack_description \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {SUMMARY_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(&input.live_url)
            .bind(&input.source_url)
            .bind(&input.image_url)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_PROJECT_STATUS))
            .bind(input.featured.unwrap_or(false))
            .bind(input.sort_order.unwrap_or(0))
            .bind(&input.architecture_diagram)
            .bind(&input.architecture_code)
            .bind(&input.tech_stack_description)
            .fetch_one(pool)
            .await
    }

    /// Fully replace a project's mutable fields and touch `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Option<ProjectSummary>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                name = $2, slug = $3, description = $4, long_description = $5, \
                live_url = $6, source_url = $7, image_url = $8, status = $9, \
                featured = $10, sort_order = $11, architecture_diagram = $12, \
                architecture_code = $13, tech_stack_description = $14, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {SUMMARY_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectSummary>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(&input.live_url)
            .bind(&input.source_url)
            .bind(&input.image_url)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_PROJECT_STATUS))
            .bind(input.featured.unwrap_or(false))
            .bind(input.sort_order.unwrap_or(0))
            .bind(&input.architecture_diagram)
            .bind(&input.architecture_code)
            .bind(&input.tech_stack_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was deleted.
    ///
    /// The store cascades the delete to `project_technologies` and `updates`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Link a technology to a project.
    pub async fn link_technology(
        pool: &PgPool,
        project_id: DbId,
        technology_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO project_technologies (project_id, technology_id) VALUES ($1, $2)")
            .bind(project_id)
            .bind(technology_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
