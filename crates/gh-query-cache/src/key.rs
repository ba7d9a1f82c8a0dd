//! Canonical cache keys
//!
//! A [`QueryKey`] is an ordered tuple of string segments identifying one
//! cached request. Two requests with equal keys share a single cache entry
//! and are deduplicated against each other.

use std::fmt;

/// Ordered, canonical identifier for a cached request
///
/// Keys are built from a resource kind plus its parameters, e.g.
/// `["github", "search", "octocat"]` or `["repositories", "octocat"]`.
/// Equality and hashing are derived from the full segment list, so the
/// segment order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    /// Build a key from ordered segments
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// The ordered segments of this key
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Whether this key starts with the given segment prefix
    ///
    /// Used for prefix invalidation, e.g. marking every entry under
    /// `["github", "search"]` stale at once.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.0.len()
            && self.0.iter().zip(prefix).all(|(segment, p)| segment == p)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_segments_make_equal_keys() {
        let a = QueryKey::new(["github", "search", "octocat"]);
        let b = QueryKey::new(vec![
            "github".to_string(),
            "search".to_string(),
            "octocat".to_string(),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_segment_order_is_significant() {
        let a = QueryKey::new(["github", "search"]);
        let b = QueryKey::new(["search", "github"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_parameters_make_different_keys() {
        let a = QueryKey::new(["repositories", "octocat"]);
        let b = QueryKey::new(["repositories", "torvalds"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_starts_with() {
        let key = QueryKey::new(["github", "search", "octocat"]);
        assert!(key.starts_with(&["github"]));
        assert!(key.starts_with(&["github", "search"]));
        assert!(key.starts_with(&["github", "search", "octocat"]));
        assert!(!key.starts_with(&["repositories"]));
        assert!(!key.starts_with(&["github", "search", "octocat", "extra"]));
    }

    #[test]
    fn test_display_joins_segments() {
        let key = QueryKey::new(["repositories", "octocat"]);
        assert_eq!(key.to_string(), "repositories:octocat");
    }
}
