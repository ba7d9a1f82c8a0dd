//! Query state, options, and supporting types
//!
//! [`QueryState`] is the snapshot handed back to callers; [`QueryOptions`]
//! carries the per-key policy (enablement, staleness window, retry count).

use std::fmt;
use std::time::Duration;

/// Errors a fetch function can produce
///
/// The engine only needs to know how to render the error and whether it is
/// worth retrying. Validation-style failures should report `false` from
/// [`QueryError::is_retryable`] so they surface immediately.
pub trait QueryError: fmt::Display {
    /// Whether an automatic retry could plausibly succeed
    fn is_retryable(&self) -> bool;
}

/// Lifecycle status of a cache entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryStatus {
    /// No fetch has been requested for this key
    #[default]
    Idle,
    /// First fetch in flight, no prior data
    Loading,
    /// Last fetch resolved with data
    Success,
    /// Last fetch failed
    Error,
}

/// Per-key fetch policy
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Whether the query may fetch at all; disabled queries only return
    /// the current snapshot
    pub enabled: bool,
    /// How long resolved data counts as fresh; within this window a fetch
    /// is a cache hit and performs no network call
    pub stale_time: Duration,
    /// Maximum automatic retries on retryable failures
    pub retry: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            stale_time: Duration::ZERO,
            retry: 0,
        }
    }
}

impl QueryOptions {
    /// Options with defaults: enabled, immediately stale, no retry
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the query may fetch
    pub fn enabled_when(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the freshness window
    pub fn with_stale_time(mut self, stale_time: Duration) -> Self {
        self.stale_time = stale_time;
        self
    }

    /// Set the maximum automatic retry count
    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }
}

/// Snapshot of one cache entry, typed for the caller
///
/// Invariants mirror the entry itself: `Success` implies `data` is present
/// and `error` is absent; `Error` implies `error` is present and `data` is
/// absent. Stale data keeps rendering only while a refetch is in flight,
/// not after it has failed.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    /// Lifecycle status of the entry
    pub status: QueryStatus,
    /// Last successfully resolved value, if any
    pub data: Option<T>,
    /// Last failure, cleared by the next success
    pub error: Option<String>,
    /// True exactly while a request for this key is in flight, including
    /// background refetches of stale data
    pub is_fetching: bool,
}

impl<T> QueryState<T> {
    /// Snapshot for a key that has never been fetched
    pub fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            is_fetching: false,
        }
    }

    /// True only during the very first fetch for a key with no prior data
    pub fn is_loading(&self) -> bool {
        self.is_fetching && self.data.is_none()
    }
}

impl<T: Clone + Default> QueryState<T> {
    /// The resolved value, or the type's default (an empty list for `Vec`)
    pub fn data_or_default(&self) -> T {
        self.data.clone().unwrap_or_default()
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Cache effectiveness counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Fetches served from cache (fresh data or a joined in-flight request)
    pub hits: u64,
    /// Fetches that went to the network
    pub misses: u64,
    /// Number of cache entries currently held
    pub entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let state: QueryState<Vec<String>> = QueryState::idle();
        assert_eq!(state.status, QueryStatus::Idle);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
        assert!(!state.is_fetching);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_is_loading_requires_no_prior_data() {
        let mut state: QueryState<Vec<String>> = QueryState::idle();
        state.is_fetching = true;
        assert!(state.is_loading());

        state.data = Some(vec!["cached".to_string()]);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_data_or_default_is_empty_list_when_absent() {
        let state: QueryState<Vec<String>> = QueryState::idle();
        assert!(state.data_or_default().is_empty());
    }

    #[test]
    fn test_options_builder() {
        let options = QueryOptions::new()
            .enabled_when(false)
            .with_stale_time(Duration::from_secs(300))
            .with_retry(1);
        assert!(!options.enabled);
        assert_eq!(options.stale_time, Duration::from_secs(300));
        assert_eq!(options.retry, 1);
    }

    #[test]
    fn test_options_default_is_immediately_stale() {
        let options = QueryOptions::default();
        assert!(options.enabled);
        assert_eq!(options.stale_time, Duration::ZERO);
        assert_eq!(options.retry, 0);
    }
}
