//! Handlers for the `/integrations` resource.

use appdash_core::error::CoreError;
use appdash_core::taxonomy::{validate_integration_status, validate_slug};
use appdash_core::types::DbId;
use appdash_db::models::integration::{Integration, IntegrationInput};
use appdash_db::repositories::IntegrationRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Reject malformed enumerated fields before any SQL runs.
fn validate_input(input: &IntegrationInput) -> Result<(), AppError> {
    validate_slug(&input.slug)?;
    if let Some(status) = &input.status {
        validate_integration_status(status)?;
    }
    Ok(())
}

/// GET /api/integrations
pub async fn list_integrations(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Integration>>>> {
    let integrations = IntegrationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(integrations)))
}

/// POST /api/integrations
pub async fn create_integration(
    State(state): State<AppState>,
    Json(input): Json<IntegrationInput>,
) -> AppResult<Json<DataResponse<Integration>>> {
    validate_input(&input)?;
    let integration = IntegrationRepo::create(&state.pool, &input).await?;
    tracing::info!(integration_id = integration.id, slug = %integration.slug, "Integration created");
    Ok(Json(DataResponse::new(integration)))
}

/// GET /api/integrations/{id}
pub async fn get_integration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Integration>>> {
    let integration = IntegrationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Integration",
            id,
        }))?;
    Ok(Json(DataResponse::new(integration)))
}

/// PUT /api/integrations/{id}
///
/// Full replacement: omitted optional fields become defaults/nulls.
pub async fn update_integration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<IntegrationInput>,
) -> AppResult<Json<DataResponse<Integration>>> {
    validate_input(&input)?;
    let integration = IntegrationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Integration",
            id,
        }))?;
    tracing::info!(integration_id = id, "Integration updated");
    Ok(Json(DataResponse::new(integration)))
}

/// DELETE /api/integrations/{id}
pub async fn delete_integration(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = IntegrationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Integration",
            id,
        }));
    }

    tracing::info!(integration_id = id, "Integration deleted");
    Ok(Json(MessageResponse::new("Integration deleted successfully")))
}
