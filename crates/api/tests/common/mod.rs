//! Shared helpers for HTTP-level integration tests.
//!
//! Requests go through `tower::ServiceExt::oneshot` against the same router
//! (and middleware stack) the production binary builds, without a TCP
//! listener.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use appdash_api::auth::jwt::JwtConfig;
use appdash_api::config::{Environment, ServerConfig};
use appdash_api::github::CommitFeedCache;
use appdash_api::router::build_app_router;
use appdash_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(environment: Environment) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        environment,
        admin_email: "admin@haripriya.org".to_string(),
        admin_password: "admin123".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Mirrors the construction in `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_env(pool, Environment::Development)
}

/// Like [`build_test_app`] but with an explicit environment, for exercising
/// the production seed gate.
pub fn build_test_app_with_env(pool: PgPool, environment: Environment) -> Router {
    let config = test_config(environment);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        http: reqwest::Client::new(),
        commit_cache: CommitFeedCache::new(),
    };
    build_app_router(state, &config)
}

pub async fn get(app: &Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None, None).await
}

pub async fn get_with_bearer(app: &Router, path: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, path, None, Some(token)).await
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, Some(body), None).await
}

pub async fn post_empty(app: &Router, path: &str) -> Response<Body> {
    send(app, Method::POST, path, None, None).await
}

pub async fn put_json(app: &Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, path, Some(body), None).await
}

pub async fn delete(app: &Router, path: &str) -> Response<Body> {
    send(app, Method::DELETE, path, None, None).await
}

async fn send(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    bearer: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    app.clone().oneshot(request).await.expect("response")
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
