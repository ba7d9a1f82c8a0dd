//! Keyed query facade over the GitHub client
//!
//! Binds each client operation to its canonical cache key and per-resource
//! policy. This is the layer the UI talks to: it decides when a request is
//! enabled, routes it through the cache engine (deduplication, staleness,
//! retry), and hands back `QueryState` snapshots.

use crate::client::GitHubClient;
use crate::types::{GitHubRepository, GitHubUser};
use gh_query_cache::{CacheStats, QueryClient, QueryOptions, QueryState};
use gh_user_config::QuerySettings;
use std::sync::Arc;

/// Cache key factories
///
/// Pure functions mapping (resource kind, parameters) to the canonical
/// ordered key. Centralized so every call site derives identical keys.
pub mod keys {
    use gh_query_cache::QueryKey;

    /// Prefix shared by all user-search keys
    pub const SEARCH_PREFIX: [&str; 2] = ["github", "search"];

    /// Prefix shared by all repository keys
    pub const REPOSITORIES_PREFIX: [&str; 1] = ["repositories"];

    /// Key for a user search: `("github", "search", query)`
    pub fn user_search(query: &str) -> QueryKey {
        QueryKey::new(["github", "search", query])
    }

    /// Key for a user's repositories: `("repositories", username)`
    pub fn user_repositories(username: &str) -> QueryKey {
        QueryKey::new(["repositories", username])
    }
}

/// Cached GitHub queries
///
/// Wraps a `GitHubClient` with the query cache. Cloneable-by-Arc; the TUI
/// middleware shares one instance across its spawned fetch tasks.
pub struct GitHubQueries {
    client: Arc<dyn GitHubClient>,
    cache: Arc<QueryClient>,
    settings: QuerySettings,
}

impl GitHubQueries {
    /// Create a new facade
    ///
    /// # Arguments
    ///
    /// * `client` - The inner client to delegate API calls to
    /// * `cache` - Shared cache instance
    /// * `settings` - Per-resource policy (staleness, retry counts)
    pub fn new(
        client: Arc<dyn GitHubClient>,
        cache: Arc<QueryClient>,
        settings: QuerySettings,
    ) -> Self {
        Self {
            client,
            cache,
            settings,
        }
    }

    /// Search users, keyed by the query string
    ///
    /// Disabled for an empty query (the "no active search" sentinel);
    /// failures are surfaced without automatic retry under the default
    /// policy.
    pub async fn search_users(&self, query: &str) -> QueryState<Vec<GitHubUser>> {
        let key = keys::user_search(query);
        let options = QueryOptions::new()
            .enabled_when(!query.is_empty())
            .with_stale_time(self.settings.search_stale_time())
            .with_retry(self.settings.search_retry);

        self.cache
            .fetch(&key, &options, || self.client.search_users(query))
            .await
    }

    /// Fetch a user's repositories, keyed by username
    ///
    /// Only enabled while the user's row is expanded. Within the freshness
    /// window a re-expansion is served from cache without a network call.
    pub async fn user_repositories(
        &self,
        username: &str,
        expanded: bool,
    ) -> QueryState<Vec<GitHubRepository>> {
        let key = keys::user_repositories(username);
        let options = QueryOptions::new()
            .enabled_when(expanded && !username.is_empty())
            .with_stale_time(self.settings.repo_stale_time())
            .with_retry(self.settings.repo_retry);

        self.cache
            .fetch(&key, &options, || self.client.fetch_repositories(username))
            .await
    }

    /// Current search snapshot without triggering a fetch
    pub fn search_state(&self, query: &str) -> QueryState<Vec<GitHubUser>> {
        self.cache.state(&keys::user_search(query))
    }

    /// Current repositories snapshot without triggering a fetch
    pub fn repositories_state(&self, username: &str) -> QueryState<Vec<GitHubRepository>> {
        self.cache.state(&keys::user_repositories(username))
    }

    /// Mark a search stale so the next fetch goes back to the network
    pub fn refresh_search(&self, query: &str) {
        self.cache.invalidate(&keys::user_search(query));
    }

    /// Cache effectiveness counters
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
