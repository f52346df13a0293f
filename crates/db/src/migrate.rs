//! Additive, idempotent schema migration.
//!
//! Brings an older deployment up to the current schema without touching
//! existing data. Every statement is an `IF NOT EXISTS` form, so re-running
//! is a no-op. Deliberately runs outside a transaction: each statement is
//! independently idempotent, and a partial run leaves the schema in a state
//! the next run completes.

use sqlx::PgPool;

/// Statements applied in order by [`apply_additive_migration`].
const STATEMENTS: &[&str] = &[
    "ALTER TABLE projects ADD COLUMN IF NOT EXISTS architecture_diagram TEXT",
    "ALTER TABLE projects ADD COLUMN IF NOT EXISTS architecture_code TEXT",
    "ALTER TABLE projects ADD COLUMN IF NOT EXISTS tech_stack_description TEXT",
    "CREATE TABLE IF NOT EXISTS updates ( \
        id BIGSERIAL PRIMARY KEY, \
        project_id BIGINT NOT NULL REFERENCES projects(id) ON DELETE CASCADE, \
        title VARCHAR(200) NOT NULL, \
        content TEXT NOT NULL, \
        version VARCHAR(50), \
        update_type VARCHAR(20) NOT NULL DEFAULT 'feature' \
            CHECK (update_type IN ('feature', 'bugfix', 'security', 'performance', 'breaking')), \
        published BOOLEAN NOT NULL DEFAULT true, \
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(), \
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW() \
    )",
    "CREATE INDEX IF NOT EXISTS idx_updates_project_id ON updates(project_id)",
    "CREATE INDEX IF NOT EXISTS idx_updates_published ON updates(published)",
];

/// Apply the additive migration statements. Safe to run repeatedly.
pub async fn apply_additive_migration(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Additive migration applied");
    Ok(())
}
