//! Reducers
//!
//! Pure state transitions. Each feature has its own reducer; the root
//! `reduce` routes tagged actions to them. Side effects live in middleware.

pub mod app_reducer;
pub mod repository_reducer;
pub mod search_reducer;

use crate::actions::Action;
use crate::state::AppState;

/// Reduce application state based on an action
pub fn reduce(state: AppState, action: &Action) -> AppState {
    match action {
        // Raw key events are consumed by the keyboard middleware
        Action::Key(_) => state,
        Action::Global(action) => app_reducer::reduce_global(state, action),
        Action::Search(action) => search_reducer::reduce_search(state, action),
        Action::Repository(action) => repository_reducer::reduce_repository(state, action),
    }
}
