//! Paths that are never faulted.

use std::collections::HashSet;

/// Paths exempt from fault injection unless explicitly configured otherwise
pub const DEFAULT_BLOCKED_PATHS: [&str; 2] = ["/ping", "/health"];

/// Exact-match path blocklist.
///
/// Matching is case-sensitive and literal: `/health` blocks `/health` only,
/// not `/health/live` or `/Health`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    blocked: HashSet<String>,
}

impl PathFilter {
    /// Create a filter from exactly the given paths
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            blocked: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a filter from the given paths plus [`DEFAULT_BLOCKED_PATHS`]
    pub fn with_defaults<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let mut filter = Self::new(paths);
        filter
            .blocked
            .extend(DEFAULT_BLOCKED_PATHS.iter().map(|p| (*p).to_string()));
        filter
    }

    /// Whether `path` is exempt from faults
    #[must_use]
    pub fn is_blocked(&self, path: &str) -> bool {
        self.blocked.contains(path)
    }

    /// Number of blocked paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether no path is blocked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Iterate over the blocked paths in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.blocked.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_only() {
        let filter = PathFilter::new(["/health"]);
        assert!(filter.is_blocked("/health"));
        assert!(!filter.is_blocked("/health/live"));
        assert!(!filter.is_blocked("/healthz"));
        assert!(!filter.is_blocked("/"));
    }

    #[test]
    fn case_sensitive() {
        let filter = PathFilter::new(["/ping"]);
        assert!(!filter.is_blocked("/PING"));
        assert!(!filter.is_blocked("/Ping"));
    }

    #[test]
    fn unlisted_paths_pass() {
        let filter = PathFilter::default();
        assert!(filter.is_empty());
        assert!(!filter.is_blocked("/data"));
        assert!(!filter.is_blocked(""));
    }

    #[test]
    fn defaults_are_merged() {
        let filter = PathFilter::with_defaults(["/ready", "/health"]);
        assert_eq!(filter.len(), 3);
        assert!(filter.is_blocked("/ping"));
        assert!(filter.is_blocked("/health"));
        assert!(filter.is_blocked("/ready"));
    }

    #[test]
    fn iter_lists_paths() {
        let filter = PathFilter::new(vec!["/a".to_string(), "/b".to_string()]);
        let mut paths: Vec<_> = filter.iter().collect();
        paths.sort_unstable();
        assert_eq!(paths, ["/a", "/b"]);
    }
}
