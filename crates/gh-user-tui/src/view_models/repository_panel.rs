//! Repository panel content derivation
//!
//! Same priority scheme as the search content, for the per-user panel:
//! loading (no prior data), then error, then empty, then the repositories.

use gh_user_client::{GitHubRepository, QueryState};

/// What an expanded user's panel renders
#[derive(Debug, PartialEq)]
pub enum RepoPanelContent<'a> {
    /// First fetch in flight (or not yet started)
    Loading,
    /// The fetch failed
    Error(String),
    /// The user has no repositories
    Empty,
    /// Repositories to render
    Data(&'a [GitHubRepository]),
}

/// Derive the panel sub-state from the username's cache snapshot
///
/// `None` means the row was just expanded and no snapshot has been
/// dispatched yet, which renders the same as a first fetch.
pub fn derive_repo_panel(
    panel: Option<&QueryState<Vec<GitHubRepository>>>,
) -> RepoPanelContent<'_> {
    let Some(state) = panel else {
        return RepoPanelContent::Loading;
    };

    if state.is_loading() {
        return RepoPanelContent::Loading;
    }
    if let Some(error) = &state.error {
        return RepoPanelContent::Error(format!("Failed to load repositories: {}", error));
    }
    match &state.data {
        Some(repos) if repos.is_empty() => RepoPanelContent::Empty,
        Some(repos) => RepoPanelContent::Data(repos),
        None => RepoPanelContent::Loading,
    }
}

/// The description to render for a repository, if any
///
/// The API reports `null` for missing descriptions; an empty string gets
/// no line either.
pub fn description_line(repo: &GitHubRepository) -> Option<&str> {
    repo.description.as_deref().filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_query_cache::QueryStatus;
    use url::Url;

    fn repo(id: u64, name: &str, description: Option<&str>, stars: u64) -> GitHubRepository {
        GitHubRepository {
            id,
            name: name.to_string(),
            description: description.map(String::from),
            stargazers_count: stars,
            html_url: Url::parse(&format!("https://github.com/octocat/{}", name)).unwrap(),
        }
    }

    fn success(repos: Vec<GitHubRepository>) -> QueryState<Vec<GitHubRepository>> {
        QueryState {
            status: QueryStatus::Success,
            data: Some(repos),
            error: None,
            is_fetching: false,
        }
    }

    #[test]
    fn test_missing_snapshot_is_loading() {
        assert_eq!(derive_repo_panel(None), RepoPanelContent::Loading);
    }

    #[test]
    fn test_first_fetch_is_loading() {
        let state = QueryState {
            status: QueryStatus::Loading,
            data: None,
            error: None,
            is_fetching: true,
        };
        assert_eq!(derive_repo_panel(Some(&state)), RepoPanelContent::Loading);
    }

    #[test]
    fn test_two_repositories_render_with_and_without_description() {
        let repos = vec![
            repo(1, "hello-world", Some("My first repository"), 80),
            repo(2, "spoon-knife", None, 12000),
        ];
        let state = success(repos);

        match derive_repo_panel(Some(&state)) {
            RepoPanelContent::Data(repos) => {
                assert_eq!(repos.len(), 2);
                assert_eq!(repos[0].name, "hello-world");
                assert_eq!(repos[0].stargazers_count, 80);
                assert_eq!(description_line(&repos[0]), Some("My first repository"));
                assert_eq!(repos[1].name, "spoon-knife");
                assert_eq!(repos[1].stargazers_count, 12000);
                // No description paragraph for the null-description entry
                assert_eq!(description_line(&repos[1]), None);
            }
            other => panic!("expected data, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_description_gets_no_line() {
        let r = repo(1, "hello-world", Some(""), 0);
        assert_eq!(description_line(&r), None);
    }

    #[test]
    fn test_zero_repositories_render_the_empty_state() {
        let state = success(vec![]);
        assert_eq!(derive_repo_panel(Some(&state)), RepoPanelContent::Empty);
    }

    #[test]
    fn test_failure_renders_the_error_message() {
        let state = QueryState {
            status: QueryStatus::Error,
            data: None,
            error: Some("GitHub API error: Not Found".to_string()),
            is_fetching: false,
        };

        assert_eq!(
            derive_repo_panel(Some(&state)),
            RepoPanelContent::Error(
                "Failed to load repositories: GitHub API error: Not Found".to_string()
            )
        );
    }

    #[test]
    fn test_background_refresh_keeps_showing_data() {
        let mut state = success(vec![repo(1, "hello-world", None, 1)]);
        state.is_fetching = true;

        assert!(matches!(
            derive_repo_panel(Some(&state)),
            RepoPanelContent::Data(_)
        ));
    }
}
