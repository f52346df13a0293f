//! Routes for the technologies resource, mounted at `/technologies`.

use axum::routing::get;
use axum::Router;

use crate::handlers::technologies;
use crate::state::AppState;

/// ```text
/// GET    /       -> list_technologies
/// POST   /       -> create_technology
/// GET    /{id}   -> get_technology
/// PUT    /{id}   -> update_technology
/// DELETE /{id}   -> delete_technology
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(technologies::list_technologies).post(technologies::create_technology),
        )
        .route(
            "/{id}",
            get(technologies::get_technology)
                .put(technologies::update_technology)
                .delete(technologies::delete_technology),
        )
}
