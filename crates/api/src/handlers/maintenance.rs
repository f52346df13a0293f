//! Handlers for destructive reseeding and the additive schema migration.

use appdash_core::error::CoreError;
use appdash_db::migrate::apply_additive_migration;
use appdash_db::seed::{run_seed, SeedAdmin, SeedDataset};
use axum::extract::State;
use axum::Json;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Build the admin row every seed run inserts, hashing the configured
/// bootstrap password.
fn seed_admin(state: &AppState) -> Result<SeedAdmin, AppError> {
    let password_hash = hash_password(&state.config.admin_password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;
    Ok(SeedAdmin {
        email: state.config.admin_email.clone(),
        password_hash,
        first_name: "Hari".to_string(),
        last_name: "Admin".to_string(),
    })
}

/// POST /api/seed
///
/// Wipe and repopulate with the general dataset. Refused in production.
pub async fn seed_general(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    if state.config.is_production() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Seeding is not allowed in production".into(),
        )));
    }

    let admin = seed_admin(&state)?;
    run_seed(&state.pool, &SeedDataset::general(), &admin).await?;
    Ok(Json(MessageResponse::new("Database seeded successfully")))
}

/// POST /api/seed-civic
///
/// Wipe and repopulate with the showcase dataset.
pub async fn seed_showcase(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let admin = seed_admin(&state)?;
    run_seed(&state.pool, &SeedDataset::showcase(), &admin).await?;
    Ok(Json(MessageResponse::new(
        "Showcase database seeded successfully",
    )))
}

/// POST /api/migrate
///
/// Additive, idempotent schema migration; never destructive.
pub async fn migrate(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    apply_additive_migration(&state.pool).await?;
    Ok(Json(MessageResponse::new("Database migrated successfully")))
}
