use crate::ctx::RequestDescriptor;
use crate::engine::{EngineFault, RequestPhase, Verdict};
use crate::mock::MockResponseError;
use crate::rule::{Decision, Rule};
use dashmap::DashMap;
use futures_util::FutureExt;
use http::{HeaderMap, Method, Uri};
use std::any::Any;
use std::net::IpAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_HOOK_TIMEOUT: Duration = Duration::from_millis(2000);

/// Runs a rule once per request and turns whatever happens into a `Verdict`.
///
/// The engine is shared by every in-flight request (`&self` only). The one
/// piece of mutable state, the set of already reported invalid responses,
/// is a concurrent map owned by the engine.
pub struct RuleEngine {
    rule: Arc<dyn Rule>,
    hook_timeout: Duration,
    pub(crate) reported: DashMap<(String, &'static str), ()>,
}

impl RuleEngine {
    pub fn new(rule: Arc<dyn Rule>) -> Self {
        Self {
            rule,
            hook_timeout: DEFAULT_HOOK_TIMEOUT,
            reported: DashMap::new(),
        }
    }

    pub fn with_hook_timeout(mut self, timeout: Duration) -> Self {
        self.hook_timeout = timeout;
        self
    }

    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    pub fn hook_timeout(&self) -> Duration {
        self.hook_timeout
    }

    /// Describe a request straight from its request line and headers, then evaluate it.
    pub async fn intercept(
        &self,
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        peer_ip: IpAddr,
    ) -> Verdict {
        match RequestDescriptor::from_parts(method, uri, headers, peer_ip) {
            Ok(req) => self.evaluate(&req).await,
            Err(err) => {
                tracing::warn!(
                    method = %method,
                    uri = %uri,
                    error = %err,
                    "request could not be described; forwarding"
                );
                Verdict::FailOpen(EngineFault::MalformedDescriptor(err))
            }
        }
    }

    /// Invoke the rule for one request.
    ///
    /// Intent:
    /// DECIDE (bounded by the hook deadline) --> VALIDATE --> (REPLY | FORWARD)
    ///
    /// Dropping the returned future (client gone, request cancelled) abandons
    /// the decision; nothing is written on its behalf.
    pub async fn evaluate(&self, req: &RequestDescriptor) -> Verdict {
        let rule = self.rule.name();
        let invocation = AssertUnwindSafe(self.rule.decide(req)).catch_unwind();

        let decision = match tokio::time::timeout(self.hook_timeout, invocation).await {
            Ok(Ok(Ok(decision))) => decision,

            Ok(Ok(Err(source))) => {
                return self.fail_open(
                    req,
                    EngineFault::HookException {
                        rule: rule.to_string(),
                        source,
                    },
                );
            }

            Ok(Err(panic)) => {
                return self.fail_open(
                    req,
                    EngineFault::HookPanicked {
                        rule: rule.to_string(),
                        message: panic_message(panic.as_ref()),
                    },
                );
            }

            Err(_) => {
                return self.fail_open(
                    req,
                    EngineFault::HookTimeout {
                        rule: rule.to_string(),
                        timeout: self.hook_timeout,
                    },
                );
            }
        };

        match decision {
            Decision::Continue => {
                tracing::debug!(
                    request_id = %req.request_id(),
                    rule,
                    url = %req.url_str(),
                    phase = %RequestPhase::Forwarded,
                    "request forwarded"
                );
                Verdict::Forward
            }

            Decision::Mock(resp) => match resp.validate() {
                Ok(validated) => {
                    tracing::info!(
                        request_id = %req.request_id(),
                        rule,
                        url = %req.url_str(),
                        status = validated.status().as_u16(),
                        phase = %RequestPhase::Replied,
                        "request mocked"
                    );
                    Verdict::Reply(validated)
                }
                Err(source) => {
                    self.report_invalid_response(req, rule, &source);
                    Verdict::FailOpen(EngineFault::InvalidMockResponse {
                        rule: rule.to_string(),
                        source,
                    })
                }
            },
        }
    }

    fn fail_open(&self, req: &RequestDescriptor, fault: EngineFault) -> Verdict {
        tracing::error!(
            request_id = %req.request_id(),
            url = %req.url_str(),
            fault = fault.kind(),
            error = %fault,
            phase = %RequestPhase::Forwarded,
            "rule failed; forwarding request unchanged"
        );
        Verdict::FailOpen(fault)
    }

    // The same problem usually repeats on every matching request. Warn once per
    // (rule, kind of problem); the offending value stays out of the key so a rule
    // that builds bodies per request cannot grow the map.
    fn report_invalid_response(
        &self,
        req: &RequestDescriptor,
        rule: &str,
        source: &MockResponseError,
    ) {
        let key = (rule.to_string(), source.kind());

        if self.reported.insert(key, ()).is_none() {
            tracing::warn!(
                request_id = %req.request_id(),
                rule,
                url = %req.url_str(),
                error = %source,
                "invalid mock response; forwarding request unchanged"
            );
        } else {
            tracing::debug!(
                request_id = %req.request_id(),
                rule,
                error = %source,
                "invalid mock response (already reported)"
            );
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
