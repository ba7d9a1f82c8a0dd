//! Search flow state

use gh_user_client::{GitHubUser, QueryState};

/// State of the search flow
///
/// `input` is what the user is typing; `query` is the committed search, set
/// on submission. `query = None` is the idle state: no active search, no
/// request. `result` mirrors the cache entry for the committed query only,
/// so switching queries can never show a stale key's loading or error state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Text currently in the input field
    pub input: String,
    /// Committed query; `None` means no active search
    pub query: Option<String>,
    /// Cache snapshot for the committed query
    pub result: QueryState<Vec<GitHubUser>>,
    /// Cursor position in the result list
    pub selected: usize,
}

impl SearchState {
    /// Users from the last resolved snapshot (empty when absent)
    pub fn users(&self) -> &[GitHubUser] {
        self.result.data.as_deref().unwrap_or_default()
    }

    /// The user row under the cursor, if any
    pub fn selected_user(&self) -> Option<&GitHubUser> {
        self.users().get(self.selected)
    }

    /// Whether the submit control is disabled (a search fetch in flight)
    pub fn submit_disabled(&self) -> bool {
        self.result.is_fetching
    }
}
