use crate::ctx::RequestDescriptor;
use std::fmt::{Display, Formatter};

/// Predicate selecting which requests a mock route applies to.
///
/// `UrlContains` tests the full URL; every other variant tests the path only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSpec {
    /// Substring anywhere in the normalised URL (`RequestDescriptor::url_str`),
    /// not the raw request target. Normalisation lowercases the host, drops a
    /// default port, percent-encodes, and resolves dot-segments, so
    /// `example.com:80/` never matches while `example.com/` does.
    UrlContains(String),

    /// Path equals the value exactly.
    ExactPath(String),

    /// Path starts with the value.
    PathPrefix(String),

    /// Path matches a glob pattern, e.g. `/2016-08-15/services/*/functions`.
    PathPattern(glob::Pattern),
}

impl RouteSpec {
    pub fn pattern(raw: &str) -> Result<Self, glob::PatternError> {
        Ok(Self::PathPattern(glob::Pattern::new(raw)?))
    }

    pub fn matches(&self, req: &RequestDescriptor) -> bool {
        match self {
            Self::UrlContains(needle) => req.url_str().contains(needle.as_str()),
            Self::ExactPath(path) => req.path() == path,
            Self::PathPrefix(prefix) => req.path().starts_with(prefix.as_str()),
            Self::PathPattern(pattern) => pattern.matches(req.path()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::UrlContains(_) => "url_contains",
            Self::ExactPath(_) => "path_exact",
            Self::PathPrefix(_) => "path_prefix",
            Self::PathPattern(_) => "path_pattern",
        }
    }
}

impl Display for RouteSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::UrlContains(v) | Self::ExactPath(v) | Self::PathPrefix(v) => v.as_str(),
            Self::PathPattern(p) => p.as_str(),
        };
        write!(f, "{}({})", self.kind(), value)
    }
}
