//! Route pattern matching logic.
//!
//! # Responsibilities
//! - Match a request path against an exact pattern (terminal routes)
//! - Match a request path against a prefix pattern (mounts)
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Exact patterns tolerate a missing trailing slash ("/api" matches
//!   "/api/"), mirroring slash-appending behavior clients expect
//! - No regex to guarantee O(n) matching

/// A pattern a request path is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches the path exactly. A terminal route: sub-paths do not match.
    Exact(String),
    /// Matches the path and everything below it.
    Prefix(String),
}

impl RoutePattern {
    /// Create an exact pattern.
    pub fn exact(path: impl Into<String>) -> Self {
        Self::Exact(path.into())
    }

    /// Create a prefix pattern.
    pub fn prefix(path: impl Into<String>) -> Self {
        Self::Prefix(path.into())
    }

    /// Returns true if the given request path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => {
                path == expected
                    || (!path.ends_with('/')
                        && expected.ends_with('/')
                        && expected[..expected.len() - 1] == *path)
            }
            Self::Prefix(prefix) => {
                path.starts_with(prefix.as_str())
                    || (!path.ends_with('/')
                        && prefix.ends_with('/')
                        && prefix[..prefix.len() - 1] == *path)
            }
        }
    }

    /// The raw pattern string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(s) | Self::Prefix(s) => s,
        }
    }

    /// The pattern without its trailing slash, the form axum's `nest`
    /// and `route` expect.
    pub fn mount_path(&self) -> &str {
        let s = self.as_str();
        s.strip_suffix('/').filter(|s| !s.is_empty()).unwrap_or(s)
    }
}
