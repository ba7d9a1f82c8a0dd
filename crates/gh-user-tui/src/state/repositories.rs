//! Repository panel state

use gh_user_client::{GitHubRepository, QueryState};
use std::collections::HashMap;

/// The single expanded user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedUser {
    pub id: u64,
    pub login: String,
}

/// Per-user repository panel state
///
/// `expanded` is plain single-select UI state: at most one row is expanded
/// at a time. `panels` mirrors the cache entries keyed by username; entries
/// survive collapse so a re-expansion can render instantly.
#[derive(Debug, Clone, Default)]
pub struct RepositoriesState {
    /// The expanded row, if any
    pub expanded: Option<ExpandedUser>,
    /// Cache snapshots keyed by username
    pub panels: HashMap<String, QueryState<Vec<GitHubRepository>>>,
}

impl RepositoriesState {
    /// Whether the given user's row is expanded
    pub fn is_expanded(&self, user_id: u64) -> bool {
        self.expanded.as_ref().is_some_and(|e| e.id == user_id)
    }

    /// Snapshot for a username, if one was ever dispatched
    pub fn panel(&self, login: &str) -> Option<&QueryState<Vec<GitHubRepository>>> {
        self.panels.get(login)
    }
}
