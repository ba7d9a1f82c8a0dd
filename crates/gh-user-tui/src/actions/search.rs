//! Search flow actions

use gh_user_client::{GitHubUser, QueryState};

/// Actions for the user-search flow
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// A character was typed into the search input
    InputChar(char),
    /// Backspace in the search input
    InputBackspace,
    /// The form was submitted with an already-trimmed query; an empty
    /// query clears the active search instead of firing a request
    Submitted { query: String },
    /// A fetch for the given query went in flight
    FetchStarted { query: String },
    /// The cache resolved a snapshot for the given query
    Updated {
        query: String,
        state: QueryState<Vec<GitHubUser>>,
    },
    /// Invalidate the committed query and refetch it
    Refresh,
    /// Move the result cursor down
    NavigateNext,
    /// Move the result cursor up
    NavigatePrevious,
}
