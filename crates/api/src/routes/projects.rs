//! Routes for the projects resource, mounted at `/projects`.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_projects
/// POST   /       -> create_project
/// GET    /{id}   -> get_project
/// PUT    /{id}   -> update_project
/// DELETE /{id}   -> delete_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
}
