//! HTTP-level integration tests for login and session introspection.

mod common;

use appdash_api::auth::password::hash_password;
use appdash_db::models::user::CreateUser;
use appdash_db::repositories::UserRepo;
use axum::http::StatusCode;
use common::{body_json, get, get_with_bearer, post_json};
use sqlx::PgPool;

async fn insert_user(pool: &PgPool, email: &str, password: &str, active: bool) {
    let password_hash = hash_password(password).expect("hash");
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash,
            first_name: "Hari".to_string(),
            last_name: "Admin".to_string(),
            role: "admin".to_string(),
            active,
        },
    )
    .await
    .expect("insert user");
}

fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({"email": email, "password": password})
}

#[sqlx::test(migrations = "../../migrations")]
async fn login_returns_token_and_touches_last_login(pool: PgPool) {
    insert_user(&pool, "admin@haripriya.org", "s3cret-enough", true).await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        &app,
        "/api/auth/login",
        login_payload("admin@haripriya.org", "s3cret-enough"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["user"]["name"], "Hari Admin");
    assert_eq!(json["data"]["user"]["role"], "admin");
    let token = json["data"]["token"].as_str().expect("token").to_string();

    let user = UserRepo::find_active_by_email(&pool, "admin@haripriya.org")
        .await
        .expect("query")
        .expect("user exists");
    assert!(user.last_login.is_some(), "login must touch last_login");

    // The issued token introspects successfully.
    let response = get_with_bearer(&app, "/api/auth/session", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["role"], "admin");
}

#[sqlx::test(migrations = "../../migrations")]
async fn login_denials_are_indistinguishable(pool: PgPool) {
    insert_user(&pool, "admin@haripriya.org", "s3cret-enough", true).await;
    insert_user(&pool, "retired@haripriya.org", "s3cret-enough", false).await;
    let app = common::build_test_app(pool);

    let mut denials = Vec::new();
    for (email, password) in [
        // wrong password
        ("admin@haripriya.org", "wrong-password"),
        // unknown account
        ("nobody@haripriya.org", "s3cret-enough"),
        // deactivated account, correct password
        ("retired@haripriya.org", "s3cret-enough"),
    ] {
        let response = post_json(&app, "/api/auth/login", login_payload(email, password)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "login {email}");
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        denials.push(json["error"].as_str().expect("error").to_string());
    }

    assert!(
        denials.windows(2).all(|pair| pair[0] == pair[1]),
        "all denials must carry the same message, got {denials:?}"
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn session_requires_a_valid_bearer_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/api/auth/session").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_with_bearer(&app, "/api/auth/session", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
