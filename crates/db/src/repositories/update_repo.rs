//! Read-only repository for the `updates` table.
//!
//! Update rows are written by the seed routines and removed by the project
//! delete cascade; the API only lists them.

use appdash_core::types::DbId;
use sqlx::PgPool;

use crate::models::update::ProjectUpdate;

/// Columns selected by the published-updates query.
const COLUMNS: &str = "\
    u.id, u.project_id, u.title, u.content, u.version, \
    u.update_type, u.published, u.created_at, u.updated_at, \
    p.name AS project_name, p.slug AS project_slug";

/// Provides read access to project updates.
pub struct UpdateRepo;

impl UpdateRepo {
    /// List published updates, newest first, optionally filtered by project.
    pub async fn list_published(
        pool: &PgPool,
        project_id: Option<DbId>,
    ) -> Result<Vec<ProjectUpdate>, sqlx::Error> {
        match project_id {
            Some(project_id) => {
                let query = format!(
                    "SELECT {COLUMNS} \
                     FROM updates u \
                     LEFT JOIN projects p ON u.project_id = p.id \
                     WHERE u.published = true AND u.project_id = $1 \
                     ORDER BY u.created_at DESC"
                );
                sqlx::query_as::<_, ProjectUpdate>(&query)
                    .bind(project_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} \
                     FROM updates u \
                     LEFT JOIN projects p ON u.project_id = p.id \
                     WHERE u.published = true \
                     ORDER BY u.created_at DESC"
                );
                sqlx::query_as::<_, ProjectUpdate>(&query).fetch_all(pool).await
            }
        }
    }
}
