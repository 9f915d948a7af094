use crate::ctx::DescriptorError;
use crate::mock::MockResponseError;
use crate::rule::RuleError;
use std::time::Duration;
use thiserror::Error;

/// Why a request was forwarded even though a rule was consulted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineFault {
    #[error("malformed request descriptor: {0}")]
    MalformedDescriptor(#[from] DescriptorError),

    #[error("rule '{rule}' failed: {source}")]
    HookException {
        rule: String,
        #[source]
        source: RuleError,
    },

    #[error("rule '{rule}' panicked: {message}")]
    HookPanicked { rule: String, message: String },

    #[error("rule '{rule}' did not decide within {timeout:?}")]
    HookTimeout { rule: String, timeout: Duration },

    #[error("rule '{rule}' produced an invalid mock response: {source}")]
    InvalidMockResponse {
        rule: String,
        #[source]
        source: MockResponseError,
    },
}

impl EngineFault {
    /// Short stable label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedDescriptor(_) => "malformed_descriptor",
            Self::HookException { .. } => "hook_exception",
            Self::HookPanicked { .. } => "hook_panicked",
            Self::HookTimeout { .. } => "hook_timeout",
            Self::InvalidMockResponse { .. } => "invalid_mock_response",
        }
    }
}
