//! Handlers for the `/auth` resource (login, session introspection).

use appdash_core::error::CoreError;
use appdash_core::types::DbId;
use appdash_db::repositories::UserRepo;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// The one denial message for every failed login. A missing account, a
/// deactivated account, and a wrong password must be indistinguishable.
const LOGIN_DENIED: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Payload for `GET /api/auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub id: DbId,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password against active users. Returns a
/// session token and touches `last_login`.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    // Inactive accounts are filtered out by the query itself.
    let user = UserRepo::find_active_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(LOGIN_DENIED.into())))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(LOGIN_DENIED.into())));
    }

    UserRepo::record_login(&state.pool, user.id).await?;

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(DataResponse::new(LoginResponse {
        token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            email: user.email,
            name: format!("{} {}", user.first_name, user.last_name),
            role: user.role,
        },
    })))
}

/// GET /api/auth/session
///
/// Introspect the Bearer token and return its identity claims.
pub async fn session(auth_user: AuthUser) -> AppResult<Json<DataResponse<SessionInfo>>> {
    Ok(Json(DataResponse::new(SessionInfo {
        id: auth_user.user_id,
        role: auth_user.role,
    })))
}
