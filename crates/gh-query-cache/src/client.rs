//! The cache engine
//!
//! [`QueryClient`] owns the per-key entries and decides, for each `fetch`
//! call, between serving fresh cached data, joining an in-flight request
//! for the same key, or going to the network.

use crate::key::QueryKey;
use crate::types::{CacheStats, QueryError, QueryOptions, QueryState, QueryStatus};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// One cached request's state
///
/// Bodies are stored as serialized JSON so entries for different resource
/// types can live in one map; callers get typed access through
/// [`QueryState`] snapshots.
#[derive(Debug, Default)]
struct CacheEntry {
    body: Option<String>,
    error: Option<String>,
    status: QueryStatus,
    is_fetching: bool,
    fetched_at: Option<Instant>,
    /// Incremented on every completed fetch; lets a caller that waited on
    /// the fetch lock detect that another caller already resolved the key
    epoch: u64,
}

impl CacheEntry {
    fn is_fresh(&self, stale_time: Duration) -> bool {
        self.status == QueryStatus::Success
            && self
                .fetched_at
                .is_some_and(|at| at.elapsed() < stale_time)
    }

    fn snapshot<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryState<T> {
        let data = self.body.as_deref().and_then(|body| {
            match serde_json::from_str(body) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!("Failed to decode cached body for {}: {}", key, e);
                    None
                }
            }
        });
        QueryState {
            status: self.status,
            data,
            error: self.error.clone(),
            is_fetching: self.is_fetching,
        }
    }
}

/// Keyed request cache with deduplication, staleness, and retry
///
/// All methods take `&self`; the client is designed to be shared behind an
/// `Arc` across async tasks. The entry map sits behind a sync mutex that is
/// never held across an await point; in-flight coordination happens on
/// per-key async locks.
#[derive(Default)]
pub struct QueryClient {
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
    locks: Mutex<HashMap<QueryKey, Arc<tokio::sync::Mutex<()>>>>,
    stats: Mutex<(u64, u64)>, // (hits, misses)
}

impl QueryClient {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the state for a key, fetching when required
    ///
    /// Decision order:
    /// 1. Disabled queries return the current snapshot untouched.
    /// 2. Fresh entries (within `stale_time`) are cache hits.
    /// 3. Otherwise the caller takes the key's fetch lock. A caller that
    ///    waited while another resolved the key joins that resolution
    ///    instead of refetching — concurrent fetches collapse into one.
    /// 4. The fetch function runs, with up to `options.retry` automatic
    ///    retries for errors that report themselves retryable.
    ///
    /// While a refetch of stale data is in flight the entry keeps serving
    /// the previous value with `is_fetching` set. A failure lands in the
    /// entry's `error` field; it never propagates as a panic or unhandled
    /// rejection.
    pub async fn fetch<T, E, F, Fut>(
        &self,
        key: &QueryKey,
        options: &QueryOptions,
        fetch_fn: F,
    ) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned,
        E: QueryError,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !options.enabled {
            return self.state(key);
        }

        let observed_epoch = {
            let entries = self.entries.lock().unwrap();
            match entries.get(key) {
                Some(entry) if entry.is_fresh(options.stale_time) => {
                    self.record_hit();
                    debug!("Cache HIT for {}", key);
                    return entry.snapshot(key);
                }
                Some(entry) => entry.epoch,
                None => 0,
            }
        };

        let lock = self.fetch_lock(key);
        let _guard = lock.lock().await;

        // Another caller may have resolved this key while we waited.
        {
            let entries = self.entries.lock().unwrap();
            if let Some(entry) = entries.get(key) {
                if entry.epoch != observed_epoch || entry.is_fresh(options.stale_time) {
                    self.record_hit();
                    debug!("Cache JOIN for {}", key);
                    return entry.snapshot(key);
                }
            }
        }

        self.mark_fetching(key);
        self.record_miss();
        debug!("Cache MISS for {}", key);

        let mut attempt = 0u32;
        let outcome = loop {
            match fetch_fn().await {
                Ok(value) => break Ok(value),
                Err(e) if e.is_retryable() && attempt < options.retry => {
                    attempt += 1;
                    debug!("Retrying {} (attempt {}/{}): {}", key, attempt, options.retry, e);
                }
                Err(e) => break Err(e),
            }
        };

        self.complete(key, outcome)
    }

    /// Current snapshot for a key without triggering a fetch
    pub fn state<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryState<T> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .map(|entry| entry.snapshot(key))
            .unwrap_or_else(QueryState::idle)
    }

    /// Mark one entry stale so the next fetch goes to the network
    ///
    /// Existing data keeps being served until the refetch resolves.
    pub fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get_mut(key) {
            entry.fetched_at = None;
            debug!("Invalidated {}", key);
        }
    }

    /// Mark every entry whose key starts with the prefix stale
    pub fn invalidate_prefix(&self, prefix: &[&str]) {
        let mut entries = self.entries.lock().unwrap();
        let mut count = 0usize;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.fetched_at = None;
                count += 1;
            }
        }
        debug!("Invalidated {} entries under prefix {:?}", count, prefix);
    }

    /// Hit/miss counters and entry count
    pub fn stats(&self) -> CacheStats {
        let (hits, misses) = *self.stats.lock().unwrap();
        CacheStats {
            hits,
            misses,
            entries: self.entries.lock().unwrap().len(),
        }
    }

    fn fetch_lock(&self, key: &QueryKey) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        Arc::clone(
            locks
                .entry(key.clone())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
        )
    }

    fn mark_fetching(&self, key: &QueryKey) {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.entry(key.clone()).or_default();
        entry.is_fetching = true;
        if entry.body.is_none() {
            entry.status = QueryStatus::Loading;
        }
    }

    fn complete<T, E>(&self, key: &QueryKey, outcome: Result<T, E>) -> QueryState<T>
    where
        T: Serialize + DeserializeOwned,
        E: QueryError,
    {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.entry(key.clone()).or_default();
        entry.is_fetching = false;
        entry.epoch += 1;

        match outcome {
            Ok(value) => match serde_json::to_string(&value) {
                Ok(body) => {
                    entry.body = Some(body);
                    entry.error = None;
                    entry.status = QueryStatus::Success;
                    entry.fetched_at = Some(Instant::now());
                    QueryState {
                        status: QueryStatus::Success,
                        data: Some(value),
                        error: None,
                        is_fetching: false,
                    }
                }
                Err(e) => {
                    entry.error = Some(format!("failed to encode cached response: {}", e));
                    entry.status = QueryStatus::Error;
                    entry.snapshot(key)
                }
            },
            Err(e) => {
                // Error entries hold no data; the failure replaces any
                // previously resolved body
                entry.body = None;
                entry.fetched_at = None;
                entry.error = Some(e.to_string());
                entry.status = QueryStatus::Error;
                entry.snapshot(key)
            }
        }
    }

    fn record_hit(&self) {
        self.stats.lock().unwrap().0 += 1;
    }

    fn record_miss(&self) {
        self.stats.lock().unwrap().1 += 1;
    }
}
