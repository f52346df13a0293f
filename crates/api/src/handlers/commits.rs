//! Handler for the proxied GitHub commit feed.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::github::{self, CommitEntry};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/github-commits`.
#[derive(Debug, Deserialize)]
pub struct CommitFeedQuery {
    pub repo: Option<String>,
    pub limit: Option<u32>,
}

/// GET /api/github-commits?repo=&limit=
///
/// Serves from the sixty-second cache when fresh; otherwise a single
/// upstream fetch. Upstream failures collapse into one generic error.
pub async fn commit_feed(
    State(state): State<AppState>,
    Query(query): Query<CommitFeedQuery>,
) -> AppResult<Json<DataResponse<Vec<CommitEntry>>>> {
    let repo = query.repo.as_deref().unwrap_or(github::DEFAULT_REPO);
    let limit = query.limit.unwrap_or(github::DEFAULT_LIMIT);

    if let Some(cached) = state.commit_cache.get(repo, limit) {
        return Ok(Json(DataResponse::new(cached)));
    }

    let commits = github::fetch_commits(&state.http, repo, limit)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, repo, "GitHub commit fetch failed");
            AppError::Upstream("Failed to fetch commits from GitHub".into())
        })?;

    state.commit_cache.put(repo, limit, commits.clone());
    Ok(Json(DataResponse::new(commits)))
}
