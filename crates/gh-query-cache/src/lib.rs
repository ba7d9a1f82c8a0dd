//! Keyed request cache with in-flight deduplication and staleness tracking
//!
//! This crate provides a small cache engine for async request/response
//! workloads. Callers hand it a canonical [`QueryKey`], per-key
//! [`QueryOptions`], and a zero-argument fetch function; the engine decides
//! whether to serve cached data, join an in-flight request, or go to the
//! network, and exposes the outcome as a [`QueryState`] snapshot.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                   QueryClient                     │
//! │  - per-key cache entries (data / error / status)  │
//! │  - per-key fetch locks (deduplication)            │
//! │  - staleness window + configurable retry          │
//! └──────────────────────────────────────────────────┘
//!            │ fetch(key, options, fetch_fn)
//!            ▼
//! ┌──────────────────────────────────────────────────┐
//! │               QueryState snapshot                 │
//! │  data · is_loading · is_fetching · error          │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_query_cache::{QueryClient, QueryKey, QueryOptions};
//! use std::time::Duration;
//!
//! # #[derive(Debug)] struct MyError;
//! # impl std::fmt::Display for MyError {
//! #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "boom") }
//! # }
//! # impl gh_query_cache::QueryError for MyError { fn is_retryable(&self) -> bool { true } }
//! # async fn example() {
//! let client = QueryClient::new();
//! let key = QueryKey::new(["repositories", "octocat"]);
//! let options = QueryOptions::new()
//!     .with_stale_time(Duration::from_secs(300))
//!     .with_retry(1);
//!
//! let state = client
//!     .fetch(&key, &options, || async { Ok::<_, MyError>(vec!["repo".to_string()]) })
//!     .await;
//!
//! assert_eq!(state.data_or_default(), vec!["repo".to_string()]);
//! # }
//! ```

pub mod client;
pub mod key;
pub mod types;

pub use client::QueryClient;
pub use key::QueryKey;
pub use types::{CacheStats, QueryError, QueryOptions, QueryState, QueryStatus};
