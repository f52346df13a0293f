//! HTTP-level integration tests for the CRUD resources: envelope shape,
//! status codes, validation, the technology usage check, and the cascade
//! behaviour observable through the API.

mod common;

use appdash_db::repositories::ProjectRepo;
use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn technology_payload(name: &str, slug: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "slug": slug,
        "category": "language",
        "color": "#DEA584",
        "active": true
    })
}

fn project_payload(name: &str, slug: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "slug": slug,
        "description": "A test project",
        "live_url": "https://example.org",
        "source_url": "https://github.com/example/project"
    })
}

// ---------------------------------------------------------------------------
// Envelope and round trips
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn created_project_id_is_usable_immediately(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(&app, "/api/projects", project_payload("Test", "test")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let id = json["data"]["id"].as_i64().expect("id");

    // get
    let response = get(&app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Test");
    assert_eq!(json["data"]["technologies"], serde_json::json!([]));

    // update
    let response = put_json(
        &app,
        &format!("/api/projects/{id}"),
        project_payload("Renamed", "test"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Renamed");

    // delete
    let response = delete(&app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project deleted successfully");

    // gone
    let response = get(&app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn not_found_envelope_on_unknown_ids(pool: PgPool) {
    let app = common::build_test_app(pool);

    for path in [
        "/api/projects/999999",
        "/api/technologies/999999",
        "/api/integrations/999999",
    ] {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {path}");
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().expect("error").contains("not found"));
    }

    let response = put_json(
        &app,
        "/api/projects/999999",
        project_payload("Ghost", "ghost"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&app, "/api/integrations/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn missing_required_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    // No name.
    let response = post_json(
        &app,
        "/api/technologies",
        serde_json::json!({"slug": "rust"}),
    )
    .await;
    assert!(
        response.status().is_client_error(),
        "payload missing a required field must be rejected"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_enumerated_value_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut payload = technology_payload("Rust", "rust");
    payload["category"] = "desktop".into();
    let response = post_json(&app, "/api/technologies", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);

    let mut payload = project_payload("Test", "test");
    payload["status"] = "paused".into();
    let response = post_json(&app, "/api/projects", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_slug_is_a_generic_write_failure(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(&app, "/api/technologies", technology_payload("Rust", "rust")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response =
        post_json(&app, "/api/technologies", technology_payload("Rust Again", "rust")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

// ---------------------------------------------------------------------------
// Technology usage check and cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn linked_technology_delete_conflicts_until_project_is_gone(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(&app, "/api/technologies", technology_payload("Rust", "rust")).await;
    let tech_id = body_json(response).await["data"]["id"].as_i64().expect("id");

    let response = post_json(&app, "/api/projects", project_payload("Test", "test")).await;
    let project_id = body_json(response).await["data"]["id"].as_i64().expect("id");

    ProjectRepo::link_technology(&pool, project_id, tech_id)
        .await
        .expect("link");

    // The project detail now embeds the technology.
    let response = get(&app, &format!("/api/projects/{project_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["technologies"][0]["id"], tech_id);
    assert_eq!(json["data"]["technologies"][0]["name"], "Rust");

    // Deleting the technology is refused while the link exists.
    let response = delete(&app, &format!("/api/technologies/{tech_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);

    // The technology row is intact.
    let response = get(&app, &format!("/api/technologies/{tech_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Delete the project first, then the technology succeeds.
    let response = delete(&app, &format!("/api/projects/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(&app, &format!("/api/technologies/{tech_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Technology deleted successfully");
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn integration_listing_is_sort_order_stable(pool: PgPool) {
    let app = common::build_test_app(pool);

    for (name, slug, sort_order) in [("Zulu", "zulu", 2), ("Alpha", "alpha", 2), ("Bravo", "bravo", 1)]
    {
        let response = post_json(
            &app,
            "/api/integrations",
            serde_json::json!({
                "name": name,
                "slug": slug,
                "description": "A test integration",
                "url": "https://example.org",
                "sort_order": sort_order
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(&app, "/api/integrations").await;
    let json = body_json(response).await;
    let slugs: Vec<_> = json["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|i| i["slug"].as_str().expect("slug"))
        .collect();
    assert_eq!(slugs, ["bravo", "alpha", "zulu"]);
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn metadata_descriptor_is_static(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/api/metadata").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["brandName"], "Apps Dashboard");
    assert_eq!(json["data"]["tagline"], "APPS DASHBOARD");
}
