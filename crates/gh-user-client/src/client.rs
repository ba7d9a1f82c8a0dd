//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. Implementations can be direct (hitting
//! the API) or mocks for testing; caching lives above the trait in
//! [`crate::queries::GitHubQueries`].

use crate::error::ApiError;
use crate::types::{GitHubRepository, GitHubUser};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the two read operations this application needs. Implementations
/// perform network I/O only — no caching, no retries; both concerns are
/// layered on top by the query facade.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Search users by query string
    ///
    /// Issues `GET /search/users?q=<query>&per_page=<limit>` and returns
    /// the `items` of the response envelope. The result cap is enforced
    /// server-side via `per_page`; nothing is truncated client-side.
    ///
    /// # Errors
    ///
    /// `ApiError::Request` on a non-success HTTP status,
    /// `ApiError::Validation` when the body does not match the expected
    /// shape, `ApiError::Transport` when the request cannot complete.
    async fn search_users(&self, query: &str) -> Result<Vec<GitHubUser>, ApiError>;

    /// Fetch a user's repositories, most recently updated first
    ///
    /// Issues `GET /users/<username>/repos?sort=updated` and returns the
    /// full list as given by the API — no page-size parameter, no
    /// client-side cap.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`GitHubClient::search_users`].
    async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GitHubRepository>, ApiError>;
}
