//! HTTP-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using reqwest.
//! This client makes real API calls without any caching. Request shape
//! (URLs, headers) is built by pure functions so it can be asserted in
//! tests without a network.

use crate::client::GitHubClient;
use crate::error::ApiError;
use crate::types::{GitHubRepository, GitHubUser, SearchResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use url::Url;

/// Media type GitHub expects for REST v3 calls
const ACCEPT_VALUE: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a User-Agent
const USER_AGENT_VALUE: &str = "gh-user-tui";

/// Direct GitHub API client using reqwest
///
/// This is the base implementation that makes actual API calls.
/// It is wrapped by [`crate::queries::GitHubQueries`] to add caching.
#[derive(Debug, Clone)]
pub struct HttpGitHubClient {
    http: reqwest::Client,
    base_url: Url,
    search_limit: u32,
}

impl HttpGitHubClient {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `api_base` - REST API base URL (e.g., `https://api.github.com`)
    /// * `token` - Optional bearer token; `None` omits the Authorization
    ///   header entirely
    /// * `search_limit` - Result cap requested via `per_page` on searches
    pub fn new(api_base: &str, token: Option<&str>, search_limit: u32) -> Result<Self> {
        let base_url = Url::parse(api_base).context("Invalid API base URL")?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "API base URL must be hierarchical: {}",
            api_base
        );

        let headers = default_headers(token).context("Invalid bearer token value")?;
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            search_limit,
        })
    }

    /// The configured API base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value, ApiError> {
        debug!("GET {}", url);
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::Validation(format!("response is not valid JSON: {}", e)))
    }
}

#[async_trait]
impl GitHubClient for HttpGitHubClient {
    async fn search_users(&self, query: &str) -> Result<Vec<GitHubUser>, ApiError> {
        let url = search_users_url(&self.base_url, query, self.search_limit);
        let raw = self.get_json(url).await?;
        parse_search_response(raw)
    }

    async fn fetch_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<GitHubRepository>, ApiError> {
        let url = user_repos_url(&self.base_url, username);
        let raw = self.get_json(url).await?;
        parse_repositories(raw)
    }
}

/// Standard headers for every request
///
/// The Authorization header is present exactly when a token is configured;
/// it is never sent empty.
pub fn default_headers(token: Option<&str>) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// URL for the search-users endpoint, query URL-encoded, result count
/// capped server-side via `per_page`
pub fn search_users_url(base: &Url, query: &str, per_page: u32) -> Url {
    let mut url = base.clone();
    // `path_segments_mut` percent-encodes segments; the base URL is
    // validated as hierarchical at construction time.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["search", "users"]);
    }
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("per_page", &per_page.to_string());
    url
}

/// URL for the user-repos endpoint, username URL-encoded, sorted by most
/// recently updated, deliberately without a page-size parameter
pub fn user_repos_url(base: &Url, username: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["users", username, "repos"]);
    }
    url.set_query(Some("sort=updated"));
    url
}

fn parse_search_response(raw: serde_json::Value) -> Result<Vec<GitHubUser>, ApiError> {
    let response: SearchResponse =
        serde_json::from_value(raw).map_err(|e| ApiError::Validation(e.to_string()))?;
    Ok(response.items)
}

fn parse_repositories(raw: serde_json::Value) -> Result<Vec<GitHubRepository>, ApiError> {
    serde_json::from_value(raw).map_err(|e| ApiError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("https://api.github.com").unwrap()
    }

    #[test]
    fn test_search_url_has_per_page_limit() {
        let url = search_users_url(&base(), "test-query", 5);
        assert_eq!(
            url.as_str(),
            "https://api.github.com/search/users?q=test-query&per_page=5"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_users_url(&base(), "test query with spaces", 5);
        assert_eq!(
            url.as_str(),
            "https://api.github.com/search/users?q=test+query+with+spaces&per_page=5"
        );
    }

    #[test]
    fn test_repos_url_sorts_by_updated_without_limit() {
        let url = user_repos_url(&base(), "octocat");
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/octocat/repos?sort=updated"
        );
        assert!(!url.as_str().contains("per_page"));
    }

    #[test]
    fn test_repos_url_encodes_username() {
        let url = user_repos_url(&base(), "user name");
        assert_eq!(
            url.as_str(),
            "https://api.github.com/users/user%20name/repos?sort=updated"
        );
    }

    #[test]
    fn test_urls_respect_base_with_path() {
        let ghe = Url::parse("https://ghe.example.com/api/v3").unwrap();
        let url = user_repos_url(&ghe, "octocat");
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/users/octocat/repos?sort=updated"
        );
    }

    #[test]
    fn test_headers_without_token_omit_authorization() {
        let headers = default_headers(None).unwrap();
        assert_eq!(headers.get(ACCEPT).unwrap(), ACCEPT_VALUE);
        assert_eq!(headers.get(USER_AGENT).unwrap(), USER_AGENT_VALUE);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_headers_with_token_attach_bearer() {
        let headers = default_headers(Some("ghp_abc123")).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer ghp_abc123");
        // Everything else is unchanged
        assert_eq!(headers.get(ACCEPT).unwrap(), ACCEPT_VALUE);
        assert_eq!(headers.get(USER_AGENT).unwrap(), USER_AGENT_VALUE);
    }

    #[test]
    fn test_parse_search_response_passes_items_through() {
        let raw = json!({
            "total_count": 100,
            "incomplete_results": false,
            "items": (1..=5).map(|i| json!({
                "id": i,
                "login": format!("user{}", i),
                "avatar_url": format!("https://avatars.githubusercontent.com/u/{}", i),
                "html_url": format!("https://github.com/user{}", i),
            })).collect::<Vec<_>>(),
        });

        let users = parse_search_response(raw).unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(users[0].login, "user1");
        assert_eq!(users[4].login, "user5");
    }

    #[test]
    fn test_parse_search_response_rejects_wrong_shape() {
        let raw = json!({ "users": [] });
        let err = parse_search_response(raw).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_parse_repositories_returns_all_without_truncation() {
        let raw = serde_json::Value::Array(
            (1..=30)
                .map(|i| {
                    json!({
                        "id": i,
                        "name": format!("repo-{}", i),
                        "description": format!("Description {}", i),
                        "stargazers_count": i * 10,
                        "html_url": format!("https://github.com/octocat/repo-{}", i),
                    })
                })
                .collect(),
        );

        let repos = parse_repositories(raw).unwrap();
        assert_eq!(repos.len(), 30);
        assert_eq!(repos[0].name, "repo-1");
        assert_eq!(repos[29].name, "repo-30");
    }

    #[test]
    fn test_parse_repositories_rejects_non_array() {
        let raw = json!({ "repos": [] });
        let err = parse_repositories(raw).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        assert!(HttpGitHubClient::new("not a url", None, 5).is_err());
    }
}
