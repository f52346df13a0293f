//! Destructive database seeding.
//!
//! Two named datasets exist behind one runner: [`SeedDataset::general`]
//! (a minimal starter portfolio) and [`SeedDataset::showcase`] (the Civic
//! Pulse / Apps Dashboard example content). [`run_seed`] wipes every table
//! and repopulates it from the chosen dataset inside a single transaction;
//! any failure rolls the whole run back and leaves prior data intact.

mod general;
mod showcase;

use appdash_core::types::DbId;
use sqlx::PgPool;

/// A technology row to seed.
pub struct SeedTechnology {
    pub name: &'static str,
    pub slug: &'static str,
    pub category: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub website_url: &'static str,
}

/// A project row to seed, with the slugs of the technologies to link.
///
/// Slugs that resolve to no seeded technology are skipped silently.
pub struct SeedProject {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub long_description: Option<&'static str>,
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub image_url: Option<&'static str>,
    pub status: &'static str,
    pub featured: bool,
    pub sort_order: i32,
    pub architecture_diagram: Option<&'static str>,
    pub architecture_code: Option<&'static str>,
    pub tech_stack_description: Option<&'static str>,
    pub technology_slugs: &'static [&'static str],
}

/// An integration row to seed.
pub struct SeedIntegration {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub status: &'static str,
    pub version: Option<&'static str>,
}

/// A changelog entry to seed, attached to a project by slug.
pub struct SeedUpdate {
    pub project_slug: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub version: &'static str,
    pub update_type: &'static str,
}

/// The admin user inserted by every seed run. The password is hashed by the
/// caller before it reaches this crate.
pub struct SeedAdmin {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// One complete seed dataset.
pub struct SeedDataset {
    /// Human-readable dataset name, used only for logging.
    pub name: &'static str,
    pub technologies: Vec<SeedTechnology>,
    pub projects: Vec<SeedProject>,
    pub integrations: Vec<SeedIntegration>,
    pub updates: Vec<SeedUpdate>,
}

/// Tables wiped before repopulation, children before parents so no delete
/// trips a foreign key.
const WIPE_ORDER: &[&str] = &[
    "updates",
    "project_technologies",
    "projects",
    "technologies",
    "integrations",
    "users",
];

/// Wipe all tables and repopulate them from `dataset`, all-or-nothing.
pub async fn run_seed(
    pool: &PgPool,
    dataset: &SeedDataset,
    admin: &SeedAdmin,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for table in WIPE_ORDER {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?;
    }

    for tech in &dataset.technologies {
        sqlx::query(
            "INSERT INTO technologies (name, slug, category, color, icon, website_url) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(tech.name)
        .bind(tech.slug)
        .bind(tech.category)
        .bind(tech.color)
        .bind(tech.icon)
        .bind(tech.website_url)
        .execute(&mut *tx)
        .await?;
    }

    for project in &dataset.projects {
        let project_id: DbId = sqlx::query_scalar(
            "INSERT INTO projects ( \
                name, slug, description, long_description, live_url, source_url, \
                image_url, status, featured, sort_order, architecture_diagram, \
                architecture_code, tech_stack_description \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING id",
        )
        .bind(project.name)
        .bind(project.slug)
        .bind(project.description)
        .bind(project.long_description)
        .bind(project.live_url)
        .bind(project.source_url)
        .bind(project.image_url)
        .bind(project.status)
        .bind(project.featured)
        .bind(project.sort_order)
        .bind(project.architecture_diagram)
        .bind(project.architecture_code)
        .bind(project.tech_stack_description)
        .fetch_one(&mut *tx)
        .await?;

        for slug in project.technology_slugs {
            let technology_id: Option<DbId> =
                sqlx::query_scalar("SELECT id FROM technologies WHERE slug = $1")
                    .bind(slug)
                    .fetch_optional(&mut *tx)
                    .await?;
            if let Some(technology_id) = technology_id {
                sqlx::query(
                    "INSERT INTO project_technologies (project_id, technology_id) \
                     VALUES ($1, $2)",
                )
                .bind(project_id)
                .bind(technology_id)
                .execute(&mut *tx)
                .await?;
            }
        }
    }

    for integration in &dataset.integrations {
        sqlx::query(
            "INSERT INTO integrations (name, slug, description, url, icon, status, version) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(integration.name)
        .bind(integration.slug)
        .bind(integration.description)
        .bind(integration.url)
        .bind(integration.icon)
        .bind(integration.status)
        .bind(integration.version)
        .execute(&mut *tx)
        .await?;
    }

    for update in &dataset.updates {
        let project_id: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM projects WHERE slug = $1")
                .bind(update.project_slug)
                .fetch_optional(&mut *tx)
                .await?;
        if let Some(project_id) = project_id {
            sqlx::query(
                "INSERT INTO updates (project_id, title, content, version, update_type) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(project_id)
            .bind(update.title)
            .bind(update.content)
            .bind(update.version)
            .bind(update.update_type)
            .execute(&mut *tx)
            .await?;
        }
    }

    sqlx::query(
        "INSERT INTO users (email, password_hash, first_name, last_name, role, active) \
         VALUES ($1, $2, $3, $4, 'admin', true)",
    )
    .bind(&admin.email)
    .bind(&admin.password_hash)
    .bind(&admin.first_name)
    .bind(&admin.last_name)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(dataset = dataset.name, "Database seeded");
    Ok(())
}
