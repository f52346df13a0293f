use std::sync::Arc;

use crate::config::ServerConfig;
use crate::github::CommitFeedCache;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: appdash_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound HTTP client for the GitHub commit feed.
    pub http: reqwest::Client,
    /// Short-lived response cache for the commit feed.
    pub commit_cache: CommitFeedCache,
}
