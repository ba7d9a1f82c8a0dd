//! Global reducer
//!
//! Handles application-wide state: quitting, focus, cache counters.

use crate::actions::GlobalAction;
use crate::state::AppState;

/// Reduce global state based on actions
pub fn reduce_global(mut state: AppState, action: &GlobalAction) -> AppState {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::FocusNext => {
            state.focus = state.focus.next();
        }
        GlobalAction::CacheStatsUpdated(stats) => {
            state.cache_stats = Some(*stats);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;
    use gh_query_cache::CacheStats;

    #[test]
    fn test_quit_stops_the_app() {
        let state = AppState::default();
        assert!(state.running);

        let state = reduce_global(state, &GlobalAction::Quit);
        assert!(!state.running);
    }

    #[test]
    fn test_focus_toggles_between_input_and_results() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::Input);

        let state = reduce_global(state, &GlobalAction::FocusNext);
        assert_eq!(state.focus, Focus::Results);

        let state = reduce_global(state, &GlobalAction::FocusNext);
        assert_eq!(state.focus, Focus::Input);
    }

    #[test]
    fn test_cache_stats_are_stored() {
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            entries: 2,
        };
        let state = reduce_global(AppState::default(), &GlobalAction::CacheStatsUpdated(stats));
        assert_eq!(state.cache_stats, Some(stats));
    }
}
