//! Path matching logic.
//!
//! # Responsibilities
//! - Match the raw request target (path plus query string)
//! - Support exact, prefix and suffix comparisons
//! - Provide a catch-all pattern for per-method fallbacks
//!
//! # Design Decisions
//! - Matching is case-sensitive
//! - The query string is part of the match target, so `/api/v1/search?q=x`
//!   matches the `/api/v1/search` prefix but not an exact `/api/v1/search`
//! - No regex to guarantee O(n) matching

use std::fmt;

/// A predicate over the raw request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// Target equals the literal.
    Exact(&'static str),
    /// Target starts with the literal.
    Prefix(&'static str),
    /// Target ends with the literal.
    Suffix(&'static str),
    /// Always matches.
    Any,
}

impl PathPattern {
    /// Returns true if the request target matches this pattern.
    pub fn matches(&self, target: &str) -> bool {
        match self {
            PathPattern::Exact(path) => target == *path,
            PathPattern::Prefix(prefix) => target.starts_with(prefix),
            PathPattern::Suffix(suffix) => target.ends_with(suffix),
            PathPattern::Any => true,
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Exact(path) => write!(f, "{}", path),
            PathPattern::Prefix(prefix) => write!(f, "{}*", prefix),
            PathPattern::Suffix(suffix) => write!(f, "*{}", suffix),
            PathPattern::Any => write!(f, "*"),
        }
    }
}
