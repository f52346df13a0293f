//! Route definitions.
//!
//! [`api_routes`] builds the `/api` tree:
//!
//! ```text
//! /projects               list, create
//! /projects/{id}          get, replace, delete
//! /technologies           list, create
//! /technologies/{id}      get, replace, delete
//! /integrations           list, create
//! /integrations/{id}      get, replace, delete
//! /updates                list published updates (?project_id=)
//! /github-commits         proxied commit feed (?repo=&limit=)
//! /metadata               static site descriptor
//! /seed                   destructive general reseed (development only)
//! /seed-civic             destructive showcase reseed
//! /migrate                additive idempotent migration
//! /auth/login             credential login (public)
//! /auth/session           token introspection (requires Bearer token)
//! ```
//!
//! The admin UI gates its pages client-side; the mutating routes here carry
//! no server-side session check.

pub mod auth;
pub mod health;
pub mod integrations;
pub mod projects;
pub mod technologies;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest("/technologies", technologies::router())
        .nest("/integrations", integrations::router())
        .nest("/auth", auth::router())
        .route("/updates", get(handlers::updates::list_updates))
        .route("/github-commits", get(handlers::commits::commit_feed))
        .route("/metadata", get(handlers::metadata::site_metadata))
        .route("/seed", post(handlers::maintenance::seed_general))
        .route("/seed-civic", post(handlers::maintenance::seed_showcase))
        .route("/migrate", post(handlers::maintenance::migrate))
}
