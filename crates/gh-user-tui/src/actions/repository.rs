//! Repository panel actions

use gh_user_client::{GitHubRepository, QueryState};

/// Actions for the per-user repository panel
#[derive(Debug, Clone)]
pub enum RepositoryAction {
    /// A user row was toggled; expands it (collapsing any other) or
    /// collapses it when it was the expanded one
    Toggled { user_id: u64, login: String },
    /// A repository fetch for the given user went in flight
    FetchStarted { login: String },
    /// The cache resolved a snapshot for the given user
    Updated {
        login: String,
        state: QueryState<Vec<GitHubRepository>>,
    },
}
