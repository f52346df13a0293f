//! Handlers for the `/technologies` resource.

use appdash_core::error::CoreError;
use appdash_core::taxonomy::{validate_hex_color, validate_slug, validate_technology_category};
use appdash_core::types::DbId;
use appdash_db::models::technology::{Technology, TechnologyInput};
use appdash_db::repositories::TechnologyRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Reject malformed enumerated fields before any SQL runs.
fn validate_input(input: &TechnologyInput) -> Result<(), AppError> {
    validate_slug(&input.slug)?;
    if let Some(category) = &input.category {
        validate_technology_category(category)?;
    }
    if let Some(color) = &input.color {
        validate_hex_color(color)?;
    }
    Ok(())
}

/// GET /api/technologies
pub async fn list_technologies(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Technology>>>> {
    let technologies = TechnologyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(technologies)))
}

/// POST /api/technologies
pub async fn create_technology(
    State(state): State<AppState>,
    Json(input): Json<TechnologyInput>,
) -> AppResult<Json<DataResponse<Technology>>> {
    validate_input(&input)?;
    let technology = TechnologyRepo::create(&state.pool, &input).await?;
    tracing::info!(technology_id = technology.id, slug = %technology.slug, "Technology created");
    Ok(Json(DataResponse::new(technology)))
}

/// GET /api/technologies/{id}
pub async fn get_technology(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Technology>>> {
    let technology = TechnologyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Technology",
            id,
        }))?;
    Ok(Json(DataResponse::new(technology)))
}

/// PUT /api/technologies/{id}
///
/// Full replacement: omitted optional fields become defaults/nulls.
pub async fn update_technology(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<TechnologyInput>,
) -> AppResult<Json<DataResponse<Technology>>> {
    validate_input(&input)?;
    let technology = TechnologyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Technology",
            id,
        }))?;
    tracing::info!(technology_id = id, "Technology updated");
    Ok(Json(DataResponse::new(technology)))
}

/// DELETE /api/technologies/{id}
///
/// Refused while any project still links the technology.
pub async fn delete_technology(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let usage = TechnologyRepo::usage_count(&state.pool, id).await?;
    if usage > 0 {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot delete technology that is used in projects".into(),
        )));
    }

    let deleted = TechnologyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Technology",
            id,
        }));
    }

    tracing::info!(technology_id = id, "Technology deleted");
    Ok(Json(MessageResponse::new("Technology deleted successfully")))
}
