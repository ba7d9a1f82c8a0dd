//! GitHub user-search and repository client with query caching support
//!
//! This crate provides a trait-based GitHub API client plus a query facade
//! that binds each operation to a canonical cache key and per-resource
//! policy (staleness window, retry count).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               GitHubClient trait                 │
//! │  - search_users()                                │
//! │  - fetch_repositories()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ HttpGitHubClient│         │   GitHubQueries     │
//! │ (direct API)    │◄────────│ (keyed cache facade)│
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_user_client::{GitHubQueries, HttpGitHubClient};
//! use gh_query_cache::QueryClient;
//! use gh_user_config::QuerySettings;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpGitHubClient::new("https://api.github.com", None, 5)?;
//! let queries = GitHubQueries::new(
//!     Arc::new(client),
//!     Arc::new(QueryClient::new()),
//!     QuerySettings::default(),
//! );
//!
//! let state = queries.search_users("octocat").await;
//! for user in state.data_or_default() {
//!     println!("{}", user.login);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod queries;
pub mod types;

pub use client::GitHubClient;
pub use error::ApiError;
pub use http_client::HttpGitHubClient;
pub use queries::{keys, GitHubQueries};
pub use types::{GitHubRepository, GitHubUser, SearchResponse};

// Re-export cache types for convenience
pub use gh_query_cache::{CacheStats, QueryState, QueryStatus};
