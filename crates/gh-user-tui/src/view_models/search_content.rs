//! Search result content derivation
//!
//! Maps the committed query plus its cache snapshot to exactly one
//! renderable sub-state. The order is significant: an in-flight fetch wins,
//! then a failure, then the empty message, then the rows — the states are
//! mutually exclusive, so an error is never shown next to results.

use crate::state::SearchState;
use gh_user_client::GitHubUser;

/// What the search content area renders
#[derive(Debug, PartialEq)]
pub enum SearchContent<'a> {
    /// No committed query: only the input form is shown
    Idle,
    /// A search fetch is in flight
    Fetching,
    /// The search failed
    Error(String),
    /// The search resolved with zero matches
    Empty(String),
    /// The search resolved with users to render
    Data {
        header: String,
        users: &'a [GitHubUser],
    },
}

/// Derive the search content sub-state
pub fn derive_search_content(search: &SearchState) -> SearchContent<'_> {
    let Some(query) = &search.query else {
        return SearchContent::Idle;
    };

    let result = &search.result;
    if result.is_fetching {
        return SearchContent::Fetching;
    }
    if let Some(error) = &result.error {
        return SearchContent::Error(format!("Failed to search users: {}", error));
    }
    match &result.data {
        Some(users) if users.is_empty() => {
            SearchContent::Empty(format!("No users found for \"{}\"", query))
        }
        Some(users) => SearchContent::Data {
            header: format!("Showing users for \"{}\"", query),
            users,
        },
        // Committed but the fetch has not started yet
        None => SearchContent::Fetching,
    }
}
