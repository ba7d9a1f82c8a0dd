//! Application configuration
//!
//! Configuration loaded from gh-user-tui.toml plus the environment.
//! Every query-policy knob (page size, staleness, retry counts) lives here
//! so behavior stays testable instead of hardwired.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from gh-user-tui.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GitHub API endpoint and credentials
    #[serde(default)]
    pub github: GitHubSettings,

    /// Per-resource query policy
    #[serde(default)]
    pub queries: QuerySettings,
}

/// GitHub API endpoint and credential settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSettings {
    /// REST API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Bearer token; when unset, `GITHUB_TOKEN`/`GH_TOKEN` are consulted.
    /// No token means requests go out unauthenticated (lower rate limits,
    /// not an error).
    #[serde(default)]
    pub token: Option<String>,
}

/// Per-resource query policy
///
/// Retry counts are explicit configuration, not a hardwired constant:
/// user searches surface failures immediately, repository fetches get one
/// automatic retry before the error is shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySettings {
    /// Result cap requested from the search endpoint via `per_page`
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,

    /// Automatic retries for user searches
    #[serde(default)]
    pub search_retry: u32,

    /// Automatic retries for repository fetches
    #[serde(default = "default_repo_retry")]
    pub repo_retry: u32,

    /// Seconds a resolved search stays fresh (0 = refetch in the
    /// background on every resubmission while showing cached rows)
    #[serde(default)]
    pub search_stale_secs: u64,

    /// Seconds a resolved repository list stays fresh
    #[serde(default = "default_repo_stale_secs")]
    pub repo_stale_secs: u64,
}

fn default_api_base() -> String {
    crate::DEFAULT_API_BASE.to_string()
}

fn default_search_limit() -> u32 {
    5
}

fn default_repo_retry() -> u32 {
    1
}

fn default_repo_stale_secs() -> u64 {
    5 * 60
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            search_retry: 0,
            repo_retry: default_repo_retry(),
            search_stale_secs: 0,
            repo_stale_secs: default_repo_stale_secs(),
        }
    }
}

impl QuerySettings {
    /// Freshness window for search entries
    pub fn search_stale_time(&self) -> Duration {
        Duration::from_secs(self.search_stale_secs)
    }

    /// Freshness window for repository entries
    pub fn repo_stale_time(&self) -> Duration {
        Duration::from_secs(self.repo_stale_secs)
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Resolve the bearer token: config file first, then environment
    ///
    /// Absence is not an error; it simply means the Authorization header
    /// is omitted.
    pub fn resolve_token(&self) -> Option<String> {
        normalize_token(self.github.token.clone())
            .or_else(|| normalize_token(std::env::var("GITHUB_TOKEN").ok()))
            .or_else(|| normalize_token(std::env::var("GH_TOKEN").ok()))
    }
}

/// Trim a candidate token and drop it when empty
///
/// An empty or whitespace-only value behaves exactly like an unset one, so
/// the Authorization header is never sent empty.
pub fn normalize_token(value: Option<String>) -> Option<String> {
    value
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
