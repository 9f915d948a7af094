use crate::ctx::RequestDescriptor;
use crate::mock::MockResponse;
use crate::route::{RouteError, RouteSpec};
use http::Method;
use smallvec::SmallVec;
use std::time::Duration;

/// One route spec and the response template it selects.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub name: String,
    pub spec: RouteSpec,
    /// Empty means any method.
    pub methods: SmallVec<[Method; 4]>,
    pub response: MockResponse,
    /// Artificial latency before the mock is returned.
    pub delay: Option<Duration>,
}

impl RouteEntry {
    pub fn new(name: impl Into<String>, spec: RouteSpec, response: MockResponse) -> Self {
        Self {
            name: name.into(),
            spec,
            methods: SmallVec::new(),
            response,
            delay: None,
        }
    }

    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = methods.into_iter().collect();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn matches(&self, req: &RequestDescriptor) -> bool {
        (self.methods.is_empty() || self.methods.contains(req.method())) && self.spec.matches(req)
    }
}

/// Ordered set of mock routes.
///
/// Precedence is registration order: when several entries match the same
/// request, the one added first wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Responses are validated here so a broken template
    /// is a load-time error rather than a request-time surprise.
    pub fn add(&mut self, entry: RouteEntry) -> Result<(), RouteError> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(RouteError::DuplicateRoute { name: entry.name });
        }

        if let Err(source) = entry.response.validate() {
            return Err(RouteError::InvalidResponse {
                name: entry.name,
                source,
            });
        }

        tracing::debug!(route = %entry.name, spec = %entry.spec, "mock route registered");
        self.entries.push(entry);
        Ok(())
    }

    /// First registered entry matching the request.
    pub fn match_first(&self, req: &RequestDescriptor) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.matches(req))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }
}
