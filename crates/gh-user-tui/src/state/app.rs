//! Root application state

use crate::state::{RepositoriesState, SearchState};
use gh_query_cache::CacheStats;

/// Which panel receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The search input form
    #[default]
    Input,
    /// The result list
    Results,
}

impl Focus {
    /// The other panel
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Results,
            Self::Results => Self::Input,
        }
    }
}

/// Root application state following the Redux pattern
#[derive(Debug, Clone)]
pub struct AppState {
    /// False once the user quits; the event loop exits on it
    pub running: bool,
    /// Which panel receives keyboard input
    pub focus: Focus,
    /// Search flow state
    pub search: SearchState,
    /// Per-user repository panel state
    pub repositories: RepositoriesState,
    /// Last cache counters reported by the GitHub middleware
    pub cache_stats: Option<CacheStats>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            search: SearchState::default(),
            repositories: RepositoriesState::default(),
            cache_stats: None,
        }
    }
}
