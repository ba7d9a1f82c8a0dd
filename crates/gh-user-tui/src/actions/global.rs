//! Application-wide actions

use gh_query_cache::CacheStats;

/// Global application actions
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Exit the application
    Quit,
    /// Move focus between the search input and the result list
    FocusNext,
    /// Fresh cache counters for the status bar
    CacheStatsUpdated(CacheStats),
}
