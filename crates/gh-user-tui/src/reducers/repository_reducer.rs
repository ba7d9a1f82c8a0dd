//! Repository reducer
//!
//! Handles the expand/collapse selection and the per-user panel snapshots.
//! Expansion is single-select: toggling the expanded row collapses it,
//! toggling another row moves the selection there.

use crate::actions::RepositoryAction;
use crate::state::{AppState, ExpandedUser};
use gh_query_cache::QueryStatus;

/// Reduce repository panel state based on actions
pub fn reduce_repository(mut state: AppState, action: &RepositoryAction) -> AppState {
    match action {
        RepositoryAction::Toggled { user_id, login } => {
            let currently = state.repositories.expanded.as_ref().map(|e| e.id);
            state.repositories.expanded = if currently == Some(*user_id) {
                None
            } else {
                Some(ExpandedUser {
                    id: *user_id,
                    login: login.clone(),
                })
            };
        }

        RepositoryAction::FetchStarted { login } => {
            let panel = state.repositories.panels.entry(login.clone()).or_default();
            panel.is_fetching = true;
            if panel.data.is_none() {
                panel.status = QueryStatus::Loading;
            }
        }

        RepositoryAction::Updated {
            login,
            state: snapshot,
        } => {
            // Panels are keyed by username, so a resolution can never land
            // on another user's entry; it is stored even when the row was
            // collapsed meanwhile, ready for the next expansion.
            state
                .repositories
                .panels
                .insert(login.clone(), snapshot.clone());
        }
    }
    state
}
