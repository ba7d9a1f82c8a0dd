//! GitHub operations middleware
//!
//! Central middleware for all GitHub API interactions:
//! - Client and query-cache initialization
//! - User searches (on submission and refresh)
//! - Repository fetches (on row expansion)
//!
//! Fetches run on a tokio runtime owned by this middleware; resolutions
//! re-enter the action chain through the dispatcher, so the UI thread
//! never blocks on the network.

use crate::actions::{Action, GlobalAction, RepositoryAction, SearchAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use gh_query_cache::QueryClient;
use gh_user_client::{GitHubQueries, HttpGitHubClient};
use gh_user_config::AppConfig;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all GitHub API operations
pub struct GitHubMiddleware {
    /// Tokio runtime for async fetches
    runtime: Runtime,
    /// Keyed query facade shared with spawned fetch tasks
    queries: Arc<GitHubQueries>,
}

impl GitHubMiddleware {
    /// Create the middleware, building the HTTP client from config
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        let token = config.resolve_token();
        log::info!(
            "GitHub client initialized for {} (token {})",
            config.github.api_base,
            if token.is_some() { "present" } else { "absent" }
        );

        let client = HttpGitHubClient::new(
            &config.github.api_base,
            token.as_deref(),
            config.queries.search_limit,
        )?;
        let queries = Arc::new(GitHubQueries::new(
            Arc::new(client),
            Arc::new(QueryClient::new()),
            config.queries.clone(),
        ));

        Ok(Self { runtime, queries })
    }

    fn spawn_search(&self, query: String, dispatcher: &Dispatcher) {
        let queries = Arc::clone(&self.queries);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let state = queries.search_users(&query).await;
            dispatcher.dispatch(Action::Search(SearchAction::Updated { query, state }));
        });
    }

    fn spawn_repositories(&self, login: String, dispatcher: &Dispatcher) {
        let queries = Arc::clone(&self.queries);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let state = queries.user_repositories(&login, true).await;
            dispatcher.dispatch(Action::Repository(RepositoryAction::Updated { login, state }));
        });
    }
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Search(SearchAction::Submitted { query }) => {
                // Blank input never fires a request; in-flight searches
                // keep the submit control disabled
                if !query.is_empty() && !state.search.result.is_fetching {
                    dispatcher.dispatch(Action::Search(SearchAction::FetchStarted {
                        query: query.clone(),
                    }));
                    self.spawn_search(query.clone(), dispatcher);
                }
            }

            Action::Search(SearchAction::Refresh) => {
                if let Some(query) = &state.search.query {
                    log::info!("Refreshing search for {:?}", query);
                    self.queries.refresh_search(query);
                    dispatcher.dispatch(Action::Search(SearchAction::FetchStarted {
                        query: query.clone(),
                    }));
                    self.spawn_search(query.clone(), dispatcher);
                }
            }

            Action::Repository(RepositoryAction::Toggled { user_id, login }) => {
                let expanding =
                    state.repositories.expanded.as_ref().map(|e| e.id) != Some(*user_id);
                if expanding {
                    dispatcher.dispatch(Action::Repository(RepositoryAction::FetchStarted {
                        login: login.clone(),
                    }));
                    self.spawn_repositories(login.clone(), dispatcher);
                }
            }

            // Report fresh cache counters whenever a fetch resolves
            Action::Search(SearchAction::Updated { .. })
            | Action::Repository(RepositoryAction::Updated { .. }) => {
                dispatcher.dispatch(Action::Global(GlobalAction::CacheStatsUpdated(
                    self.queries.stats(),
                )));
            }

            _ => {}
        }

        true
    }
}
