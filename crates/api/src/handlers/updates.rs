//! Handler for the `/updates` read endpoint.

use appdash_core::types::DbId;
use appdash_db::models::update::ProjectUpdate;
use appdash_db::repositories::UpdateRepo;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/updates`.
#[derive(Debug, Deserialize)]
pub struct UpdatesQuery {
    pub project_id: Option<DbId>,
}

/// GET /api/updates?project_id=
///
/// Published updates only, newest first, optionally scoped to one project.
pub async fn list_updates(
    State(state): State<AppState>,
    Query(query): Query<UpdatesQuery>,
) -> AppResult<Json<DataResponse<Vec<ProjectUpdate>>>> {
    let updates = UpdateRepo::list_published(&state.pool, query.project_id).await?;
    Ok(Json(DataResponse::new(updates)))
}
