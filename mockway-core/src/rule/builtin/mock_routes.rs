use crate::ctx::RequestDescriptor;
use crate::route::RouteTable;
use crate::rule::core::{Decision, Rule, RuleError};
use async_trait::async_trait;

/// Answers requests from a table of route spec -> response template.
///
/// Requests that match nothing are passed through. When several routes match,
/// the first registered one answers.
#[derive(Debug)]
pub struct MockRoutesRule {
    name: String,
    table: RouteTable,
    log_requests: bool,
}

impl MockRoutesRule {
    pub fn new(name: impl Into<String>, table: RouteTable) -> Self {
        Self {
            name: name.into(),
            table,
            log_requests: true,
        }
    }

    /// Emit one log line per decided URL.
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}

#[async_trait]
impl Rule for MockRoutesRule {
    fn name(&self) -> &str {
        &self.name
    }

    async fn decide(&self, req: &RequestDescriptor) -> Result<Decision, RuleError> {
        if self.log_requests {
            tracing::info!(
                request_id = %req.request_id(),
                method = %req.method(),
                url = %req.url_str(),
                "request intercepted"
            );
        }

        let Some(entry) = self.table.match_first(req) else {
            return Ok(Decision::Continue);
        };

        if let Some(delay) = entry.delay {
            tokio::time::sleep(delay).await;
        }

        tracing::debug!(
            request_id = %req.request_id(),
            route = %entry.name,
            spec = %entry.spec,
            "mock route matched"
        );

        Ok(Decision::Mock(entry.response.clone()))
    }
}
