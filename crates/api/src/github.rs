//! GitHub commit feed: fetch, reshape, and cache.
//!
//! A single unpaginated GET against the commit-listing API, reshaped into
//! the feed entries the UI renders. Responses are cached in-process for
//! sixty seconds per `(repo, limit)` pair to bound upstream calls; no
//! retry or rate-limit handling beyond that.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use appdash_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Repository queried when the caller does not name one.
pub const DEFAULT_REPO: &str = "hariship/apps";

/// Number of commits returned when the caller does not ask for a count.
pub const DEFAULT_LIMIT: u32 = 5;

/// How long a cached feed stays fresh.
const CACHE_TTL: Duration = Duration::from_secs(60);

/// One reshaped commit as served to the UI.
#[derive(Debug, Clone, Serialize)]
pub struct CommitEntry {
    /// Full commit hash.
    pub id: String,
    /// First line of the commit message.
    pub title: String,
    /// Full commit message.
    pub content: String,
    pub author: String,
    pub date: Timestamp,
    pub url: String,
    /// First seven characters of the hash.
    #[serde(rename = "shortHash")]
    pub short_hash: String,
}

// ---------------------------------------------------------------------------
// Upstream response shapes (only the fields we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GitHubCommit {
    sha: String,
    commit: GitHubCommitDetail,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct GitHubCommitDetail {
    message: String,
    author: GitHubCommitAuthor,
}

#[derive(Debug, Deserialize)]
struct GitHubCommitAuthor {
    name: String,
    date: Timestamp,
}

/// Reshape upstream commit objects into feed entries.
fn reshape(commits: Vec<GitHubCommit>) -> Vec<CommitEntry> {
    commits
        .into_iter()
        .map(|commit| {
            let title = commit
                .commit
                .message
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();
            let short_hash = commit.sha.chars().take(7).collect();
            CommitEntry {
                id: commit.sha,
                title,
                content: commit.commit.message,
                author: commit.commit.author.name,
                date: commit.commit.author.date,
                url: commit.html_url,
                short_hash,
            }
        })
        .collect()
}

/// Fetch the latest commits for `repo` and reshape them.
///
/// Any non-success status or transport error surfaces as the `reqwest`
/// error; the handler maps it to the generic fetch-failure response.
pub async fn fetch_commits(
    client: &reqwest::Client,
    repo: &str,
    limit: u32,
) -> Result<Vec<CommitEntry>, reqwest::Error> {
    let url = format!("https://api.github.com/repos/{repo}/commits?per_page={limit}");
    let commits: Vec<GitHubCommit> = client
        .get(url)
        .header("Accept", "application/vnd.github.v3+json")
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(reshape(commits))
}

// ---------------------------------------------------------------------------
// Response cache
// ---------------------------------------------------------------------------

struct CachedFeed {
    fetched_at: Instant,
    commits: Vec<CommitEntry>,
}

/// In-process commit feed cache keyed by `(repo, limit)`.
///
/// Cheaply cloneable; all clones share one map.
#[derive(Clone, Default)]
pub struct CommitFeedCache {
    entries: Arc<Mutex<HashMap<(String, u32), CachedFeed>>>,
}

impl CommitFeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached feed for `(repo, limit)` if still fresh.
    pub fn get(&self, repo: &str, limit: u32) -> Option<Vec<CommitEntry>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&(repo.to_string(), limit))
            .filter(|cached| cached.fetched_at.elapsed() < CACHE_TTL)
            .map(|cached| cached.commits.clone())
    }

    /// Store a freshly fetched feed.
    pub fn put(&self, repo: &str, limit: u32, commits: Vec<CommitEntry>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            (repo.to_string(), limit),
            CachedFeed {
                fetched_at: Instant::now(),
                commits,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_commit(sha: &str, message: &str, author: &str) -> GitHubCommit {
        GitHubCommit {
            sha: sha.to_string(),
            commit: GitHubCommitDetail {
                message: message.to_string(),
                author: GitHubCommitAuthor {
                    name: author.to_string(),
                    date: chrono::Utc::now(),
                },
            },
            html_url: format!("https://github.com/hariship/apps/commit/{sha}"),
        }
    }

    #[test]
    fn reshape_takes_first_message_line_as_title() {
        let commits = reshape(vec![upstream_commit(
            "0123456789abcdef",
            "Fix login redirect\n\nThe admin page bounced users back to /login.",
            "Hari",
        )]);

        assert_eq!(commits.len(), 1);
        let entry = &commits[0];
        assert_eq!(entry.title, "Fix login redirect");
        assert!(entry.content.contains("bounced users"));
        assert_eq!(entry.id, "0123456789abcdef");
        assert_eq!(entry.short_hash, "0123456");
        assert_eq!(entry.author, "Hari");
    }

    #[test]
    fn reshape_handles_short_hashes_and_empty_messages() {
        let commits = reshape(vec![upstream_commit("abc", "", "Hari")]);
        assert_eq!(commits[0].short_hash, "abc");
        assert_eq!(commits[0].title, "");
    }

    #[test]
    fn serialized_entry_uses_camel_case_short_hash() {
        let commits = reshape(vec![upstream_commit("0123456789abcdef", "Initial commit", "Hari")]);
        let json = serde_json::to_value(&commits[0]).unwrap();
        assert_eq!(json["shortHash"], "0123456");
        assert!(json.get("short_hash").is_none());
    }

    #[test]
    fn cache_round_trip_and_key_isolation() {
        let cache = CommitFeedCache::new();
        assert!(cache.get("hariship/apps", 5).is_none());

        let commits = reshape(vec![upstream_commit("0123456789abcdef", "Initial commit", "Hari")]);
        cache.put("hariship/apps", 5, commits);

        let hit = cache.get("hariship/apps", 5).expect("fresh entry should hit");
        assert_eq!(hit.len(), 1);

        // A different limit is a different cache key.
        assert!(cache.get("hariship/apps", 10).is_none());
        assert!(cache.get("other/repo", 5).is_none());
    }
}
