//! Search reducer
//!
//! Handles the search flow: input editing, query commits, and cache
//! snapshot updates. Every fetch-lifecycle action carries the query it
//! belongs to and is dropped unless it matches the committed query, so a
//! superseded search can never overwrite the current one's state.

use crate::actions::SearchAction;
use crate::state::AppState;
use gh_query_cache::{QueryState, QueryStatus};

/// Reduce search state based on actions
pub fn reduce_search(mut state: AppState, action: &SearchAction) -> AppState {
    match action {
        SearchAction::InputChar(c) => {
            state.search.input.push(*c);
        }

        SearchAction::InputBackspace => {
            state.search.input.pop();
        }

        SearchAction::Submitted { query } => {
            // Submission is disabled while a search fetch is in flight
            if state.search.result.is_fetching {
                return state;
            }
            if query.is_empty() {
                // Blank input clears the active search instead of firing
                state.search.query = None;
                state.search.result = QueryState::idle();
                state.search.selected = 0;
                state.repositories.expanded = None;
            } else if state.search.query.as_deref() != Some(query.as_str()) {
                state.search.query = Some(query.clone());
                state.search.result = QueryState::idle();
                state.search.selected = 0;
                state.repositories.expanded = None;
            }
            // Resubmitting the identical query keeps the current entry; the
            // middleware still refetches it in the background when stale.
        }

        SearchAction::FetchStarted { query } => {
            if state.search.query.as_deref() == Some(query.as_str()) {
                state.search.result.is_fetching = true;
                if state.search.result.data.is_none() {
                    state.search.result.status = QueryStatus::Loading;
                }
            }
        }

        SearchAction::Updated {
            query,
            state: snapshot,
        } => {
            if state.search.query.as_deref() == Some(query.as_str()) {
                state.search.result = snapshot.clone();
                let count = state.search.users().len();
                if count > 0 && state.search.selected >= count {
                    state.search.selected = count - 1;
                }
            } else {
                log::debug!("Dropping resolution for superseded query {:?}", query);
            }
        }

        // Refresh is a side effect; the GitHub middleware handles it
        SearchAction::Refresh => {}

        SearchAction::NavigateNext => {
            let count = state.search.users().len();
            if count > 0 {
                state.search.selected = (state.search.selected + 1) % count;
            }
        }

        SearchAction::NavigatePrevious => {
            let count = state.search.users().len();
            if count > 0 {
                state.search.selected = state.search.selected.checked_sub(1).unwrap_or(count - 1);
            }
        }
    }
    state
}
