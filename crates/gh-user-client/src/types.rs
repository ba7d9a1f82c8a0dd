//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API and double
//! as the response schema contract: a body that does not deserialize into
//! them is rejected as invalid. Unknown extra fields are ignored; URL
//! fields must parse as real URLs.

use serde::{Deserialize, Serialize};
use url::Url;

/// A GitHub user from search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    /// Stable numeric id, used to key UI rows
    pub id: u64,

    /// Username, used to look up the user's repositories
    pub login: String,

    /// Avatar image URL
    pub avatar_url: Url,

    /// Profile URL
    pub html_url: Url,

    /// Account type (e.g., "User", "Organization"); not always present
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

/// Response envelope of the search-users endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total matches on the server side (not the returned page size)
    pub total_count: u64,

    /// Whether the search timed out before scanning everything
    pub incomplete_results: bool,

    /// The matched users, capped server-side via `per_page`
    pub items: Vec<GitHubUser>,
}

/// A repository belonging to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepository {
    /// Stable numeric id
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Description; the API reports `null` for repositories without one
    pub description: Option<String>,

    /// Star count
    pub stargazers_count: u64,

    /// Repository URL
    pub html_url: Url,
}
