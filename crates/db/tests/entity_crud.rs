//! Integration tests for the repository layer against a real database:
//! CRUD round trips, ordering, the technology usage check, and cascade
//! delete behaviour.

use appdash_db::models::integration::IntegrationInput;
use appdash_db::models::project::ProjectInput;
use appdash_db::models::technology::TechnologyInput;
use appdash_db::models::user::CreateUser;
use appdash_db::repositories::{
    IntegrationRepo, ProjectRepo, TechnologyRepo, UpdateRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_technology(name: &str, slug: &str) -> TechnologyInput {
    TechnologyInput {
        name: name.to_string(),
        slug: slug.to_string(),
        category: Some("language".to_string()),
        color: Some("#DEA584".to_string()),
        icon: None,
        website_url: None,
        active: Some(true),
    }
}

fn new_project(name: &str, slug: &str) -> ProjectInput {
    ProjectInput {
        name: name.to_string(),
        slug: slug.to_string(),
        description: "A test project".to_string(),
        long_description: None,
        live_url: "https://example.org".to_string(),
        source_url: "https://github.com/example/project".to_string(),
        image_url: None,
        status: None,
        featured: None,
        sort_order: None,
        architecture_diagram: None,
        architecture_code: None,
        tech_stack_description: None,
    }
}

fn new_integration(name: &str, slug: &str, sort_order: i32) -> IntegrationInput {
    IntegrationInput {
        name: name.to_string(),
        slug: slug.to_string(),
        description: "A test integration".to_string(),
        url: "https://example.org".to_string(),
        icon: None,
        status: None,
        version: None,
        last_checked: None,
        enabled: None,
        sort_order: Some(sort_order),
    }
}

async fn insert_update(pool: &PgPool, project_id: i64, title: &str, published: bool) {
    sqlx::query(
        "INSERT INTO updates (project_id, title, content, update_type, published) \
         VALUES ($1, $2, 'content', 'feature', $3)",
    )
    .bind(project_id)
    .bind(title)
    .bind(published)
    .execute(pool)
    .await
    .expect("insert update");
}

// ---------------------------------------------------------------------------
// Technology CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn technology_create_applies_defaults(pool: PgPool) {
    let input = TechnologyInput {
        category: None,
        color: None,
        active: None,
        ..new_technology("Rust", "rust")
    };
    let tech = TechnologyRepo::create(&pool, &input).await.expect("create");

    assert_eq!(tech.category, "tool");
    assert_eq!(tech.color, "#6B7280");
    assert!(tech.active);

    let found = TechnologyRepo::find_by_id(&pool, tech.id)
        .await
        .expect("find")
        .expect("created row should be readable by id");
    assert_eq!(found.slug, "rust");
}

#[sqlx::test(migrations = "../../migrations")]
async fn technology_update_is_full_replacement(pool: PgPool) {
    let tech = TechnologyRepo::create(&pool, &new_technology("Rust", "rust"))
        .await
        .expect("create");

    // Replacement omits category/color; they fall back to defaults instead
    // of keeping the stored values.
    let replacement = TechnologyInput {
        name: "Rust Lang".to_string(),
        slug: "rust".to_string(),
        category: None,
        color: None,
        icon: None,
        website_url: None,
        active: None,
    };
    let updated = TechnologyRepo::update(&pool, tech.id, &replacement)
        .await
        .expect("update")
        .expect("row exists");

    assert_eq!(updated.name, "Rust Lang");
    assert_eq!(updated.category, "tool");
    assert_eq!(updated.color, "#6B7280");
    assert!(updated.updated_at >= tech.updated_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn technology_update_nonexistent_returns_none(pool: PgPool) {
    let result = TechnologyRepo::update(&pool, 999_999, &new_technology("Rust", "rust"))
        .await
        .expect("update should not error");
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn technology_list_ordered_by_category_then_name(pool: PgPool) {
    for (name, slug, category) in [
        ("PostgreSQL", "postgresql", "database"),
        ("Axum", "axum", "backend"),
        ("Tokio", "tokio", "backend"),
    ] {
        let input = TechnologyInput {
            category: Some(category.to_string()),
            ..new_technology(name, slug)
        };
        TechnologyRepo::create(&pool, &input).await.expect("create");
    }

    let listed = TechnologyRepo::list(&pool).await.expect("list");
    let slugs: Vec<_> = listed.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, ["axum", "tokio", "postgresql"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_technology_slug_rejected(pool: PgPool) {
    TechnologyRepo::create(&pool, &new_technology("Rust", "rust"))
        .await
        .expect("first create");
    let result = TechnologyRepo::create(&pool, &new_technology("Rust Again", "rust")).await;
    assert!(result.is_err(), "slug collision must surface as a write failure");
}

// ---------------------------------------------------------------------------
// Project CRUD and technology links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn project_detail_includes_linked_technologies(pool: PgPool) {
    let tech = TechnologyRepo::create(&pool, &new_technology("Rust", "rust"))
        .await
        .expect("create tech");
    let project = ProjectRepo::create(&pool, &new_project("Test", "test"))
        .await
        .expect("create project");

    // No links yet: the array is empty, not null.
    let detail = ProjectRepo::find_by_id_with_technologies(&pool, project.id)
        .await
        .expect("find")
        .expect("project exists");
    assert!(detail.technologies.0.is_empty());

    ProjectRepo::link_technology(&pool, project.id, tech.id)
        .await
        .expect("link");

    let detail = ProjectRepo::find_by_id_with_technologies(&pool, project.id)
        .await
        .expect("find")
        .expect("project exists");
    assert_eq!(detail.technologies.0.len(), 1);
    assert_eq!(detail.technologies.0[0].name, "Rust");
    assert_eq!(detail.technologies.0[0].id, tech.id);
}

#[sqlx::test(migrations = "../../migrations")]
async fn project_list_ordered_by_sort_order(pool: PgPool) {
    for (name, slug, sort_order) in [("Second", "second", 2), ("First", "first", 1)] {
        let input = ProjectInput {
            sort_order: Some(sort_order),
            ..new_project(name, slug)
        };
        ProjectRepo::create(&pool, &input).await.expect("create");
    }

    let listed = ProjectRepo::list_with_technologies(&pool).await.expect("list");
    let slugs: Vec<_> = listed.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["first", "second"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn technology_delete_blocked_while_linked(pool: PgPool) {
    let tech = TechnologyRepo::create(&pool, &new_technology("Rust", "rust"))
        .await
        .expect("create tech");
    let project = ProjectRepo::create(&pool, &new_project("Test", "test"))
        .await
        .expect("create project");
    ProjectRepo::link_technology(&pool, project.id, tech.id)
        .await
        .expect("link");

    // The handler's pre-check sees the link.
    let usage = TechnologyRepo::usage_count(&pool, tech.id).await.expect("count");
    assert_eq!(usage, 1);

    // The store itself also refuses: the join table has no cascade on the
    // technology side.
    assert!(TechnologyRepo::delete(&pool, tech.id).await.is_err());

    // Delete the project first; the link cascades away and the technology
    // becomes deletable.
    assert!(ProjectRepo::delete(&pool, project.id).await.expect("delete project"));
    let usage = TechnologyRepo::usage_count(&pool, tech.id).await.expect("count");
    assert_eq!(usage, 0);
    assert!(TechnologyRepo::delete(&pool, tech.id).await.expect("delete tech"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn project_delete_cascades_to_updates(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Test", "test"))
        .await
        .expect("create project");
    insert_update(&pool, project.id, "Initial Release", true).await;
    insert_update(&pool, project.id, "Unpublished Draft", false).await;

    let published = UpdateRepo::list_published(&pool, Some(project.id))
        .await
        .expect("list");
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "Initial Release");
    assert_eq!(published[0].project_name.as_deref(), Some("Test"));

    assert!(ProjectRepo::delete(&pool, project.id).await.expect("delete"));

    let after = UpdateRepo::list_published(&pool, Some(project.id))
        .await
        .expect("list");
    assert!(after.is_empty(), "cascade must remove the project's updates");
}

// ---------------------------------------------------------------------------
// Integrations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn integration_defaults_and_ordering(pool: PgPool) {
    let created = IntegrationRepo::create(&pool, &new_integration("Zulu", "zulu", 2))
        .await
        .expect("create");
    assert_eq!(created.status, "operational");
    assert!(created.enabled);

    IntegrationRepo::create(&pool, &new_integration("Alpha", "alpha", 2))
        .await
        .expect("create");
    IntegrationRepo::create(&pool, &new_integration("Bravo", "bravo", 1))
        .await
        .expect("create");

    let listed = IntegrationRepo::list(&pool).await.expect("list");
    let slugs: Vec<_> = listed.iter().map(|i| i.slug.as_str()).collect();
    // sort_order ascending, then name as tiebreak.
    assert_eq!(slugs, ["bravo", "alpha", "zulu"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn integration_delete_nonexistent_returns_false(pool: PgPool) {
    let deleted = IntegrationRepo::delete(&pool, 999_999).await.expect("delete");
    assert!(!deleted);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn inactive_users_invisible_to_login_lookup(pool: PgPool) {
    UserRepo::create(
        &pool,
        &CreateUser {
            email: "admin@haripriya.org".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            first_name: "Hari".to_string(),
            last_name: "Admin".to_string(),
            role: "admin".to_string(),
            active: false,
        },
    )
    .await
    .expect("create user");

    let found = UserRepo::find_active_by_email(&pool, "admin@haripriya.org")
        .await
        .expect("query");
    assert!(found.is_none(), "inactive user must not be returned");
}

#[sqlx::test(migrations = "../../migrations")]
async fn record_login_touches_last_login(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "admin@haripriya.org".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
            first_name: "Hari".to_string(),
            last_name: "Admin".to_string(),
            role: "admin".to_string(),
            active: true,
        },
    )
    .await
    .expect("create user");
    assert!(user.last_login.is_none());

    UserRepo::record_login(&pool, user.id).await.expect("record login");

    let found = UserRepo::find_active_by_email(&pool, "admin@haripriya.org")
        .await
        .expect("query")
        .expect("user exists");
    assert!(found.last_login.is_some());
}
