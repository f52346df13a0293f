//! Handlers for the `/projects` resource.
//!
//! List and detail responses embed the linked technologies as an array
//! aggregated in SQL; it is empty, never null, when nothing is linked.

use appdash_core::error::CoreError;
use appdash_core::taxonomy::{validate_project_status, validate_slug};
use appdash_core::types::DbId;
use appdash_db::models::project::{ProjectInput, ProjectSummary, ProjectWithTechnologies};
use appdash_db::repositories::ProjectRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Reject malformed enumerated fields before any SQL runs.
fn validate_input(input: &ProjectInput) -> Result<(), AppError> {
    validate_slug(&input.slug)?;
    if let Some(status) = &input.status {
        validate_project_status(status)?;
    }
    Ok(())
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithTechnologies>>>> {
    let projects = ProjectRepo::list_with_technologies(&state.pool).await?;
    Ok(Json(DataResponse::new(projects)))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<DataResponse<ProjectSummary>>> {
    validate_input(&input)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok(Json(DataResponse::new(project)))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectWithTechnologies>>> {
    let project = ProjectRepo::find_by_id_with_technologies(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse::new(project)))
}

/// PUT /api/projects/{id}
///
/// Full replacement: omitted optional fields become defaults/nulls.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<DataResponse<ProjectSummary>>> {
    validate_input(&input)?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(DataResponse::new(project)))
}

/// DELETE /api/projects/{id}
///
/// The store cascades the delete to technology links and updates.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
