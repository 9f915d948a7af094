//! Small rules used to drive the engine through each of its paths.

use crate::ctx::RequestDescriptor;
use crate::mock::MockResponse;
use crate::route::{RouteEntry, RouteSpec, RouteTable};
use crate::rule::builtin::MockRoutesRule;
use crate::rule::{Decision, Rule, RuleError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Barrier;

pub const SERVICES_BODY: &str = r#"{
                "services": [{
                  "serviceName": "demo",
                  "description": ""
                }]
              }"#;

pub fn services_rule() -> MockRoutesRule {
    let mut table = RouteTable::new();
    table
        .add(RouteEntry::new(
            "services",
            RouteSpec::UrlContains("/2016-08-15/services".into()),
            MockResponse::new(200)
                .with_header("Content-Type", "application/json")
                .with_body(SERVICES_BODY),
        ))
        .unwrap();
    MockRoutesRule::new("fc-services", table).with_request_logging(false)
}

pub struct FailingRule;

#[async_trait]
impl Rule for FailingRule {
    fn name(&self) -> &str {
        "failing"
    }

    async fn decide(&self, _req: &RequestDescriptor) -> Result<Decision, RuleError> {
        Err(RuleError::new("policy backend unavailable"))
    }
}

pub struct PanickingRule;

#[async_trait]
impl Rule for PanickingRule {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn decide(&self, _req: &RequestDescriptor) -> Result<Decision, RuleError> {
        panic!("rule blew up")
    }
}

pub struct HangingRule;

#[async_trait]
impl Rule for HangingRule {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn decide(&self, _req: &RequestDescriptor) -> Result<Decision, RuleError> {
        std::future::pending::<()>().await;
        Ok(Decision::Continue)
    }
}

/// Always mocks with a fixed, possibly invalid, response.
pub struct FixedRule(pub MockResponse);

#[async_trait]
impl Rule for FixedRule {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn decide(&self, _req: &RequestDescriptor) -> Result<Decision, RuleError> {
        Ok(Decision::Mock(self.0.clone()))
    }
}

/// Mocks every request with its own path as the body.
pub struct EchoPathRule;

#[async_trait]
impl Rule for EchoPathRule {
    fn name(&self) -> &str {
        "echo-path"
    }

    async fn decide(&self, req: &RequestDescriptor) -> Result<Decision, RuleError> {
        tokio::task::yield_now().await;
        Ok(Decision::Mock(
            MockResponse::new(200).with_body(req.path().to_string()),
        ))
    }
}

/// Mocks with a JSON-declared body that is broken differently for every path.
pub struct BrokenJsonPerPathRule;

#[async_trait]
impl Rule for BrokenJsonPerPathRule {
    fn name(&self) -> &str {
        "broken-json"
    }

    async fn decide(&self, req: &RequestDescriptor) -> Result<Decision, RuleError> {
        Ok(Decision::Mock(
            MockResponse::new(200)
                .with_header("Content-Type", "application/json")
                .with_body(format!("{{ \"path\": {} ", req.path())),
        ))
    }
}

/// Only decides once `n` invocations are in flight at the same time.
pub struct RendezvousRule(pub Arc<Barrier>);

#[async_trait]
impl Rule for RendezvousRule {
    fn name(&self) -> &str {
        "rendezvous"
    }

    async fn decide(&self, _req: &RequestDescriptor) -> Result<Decision, RuleError> {
        self.0.wait().await;
        Ok(Decision::Mock(MockResponse::new(204)))
    }
}
