use crate::engine::EngineFault;
use crate::mock::ValidatedResponse;
use std::fmt::{Display, Formatter};

/// Lifecycle phases of a single intercepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Received,
    Described,
    DecidedContinue,
    DecidedMock,
    Validated,
    HookFailed,
    Forwarded,
    Replied,
}

impl RequestPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Forwarded | Self::Replied)
    }
}

impl Display for RequestPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Received => "received",
            Self::Described => "described",
            Self::DecidedContinue => "decided_continue",
            Self::DecidedMock => "decided_mock",
            Self::Validated => "validated",
            Self::HookFailed => "hook_failed",
            Self::Forwarded => "forwarded",
            Self::Replied => "replied",
        };
        f.write_str(s)
    }
}

/// What the transport should do with a request once the engine is done.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The rule said `Continue`.
    Forward,

    /// The rule mocked the request and the response validated.
    Reply(ValidatedResponse),

    /// Something failed on the rule side; forward unchanged.
    FailOpen(EngineFault),
}

impl Verdict {
    pub fn is_forward(&self) -> bool {
        !matches!(self, Self::Reply(_))
    }

    pub fn response(&self) -> Option<&ValidatedResponse> {
        match self {
            Self::Reply(resp) => Some(resp),
            _ => None,
        }
    }

    pub fn fault(&self) -> Option<&EngineFault> {
        match self {
            Self::FailOpen(fault) => Some(fault),
            _ => None,
        }
    }

    /// Phases the request went through, ending in a terminal phase.
    pub fn trail(&self) -> &'static [RequestPhase] {
        use RequestPhase::*;

        match self {
            Self::Forward => &[Received, Described, DecidedContinue, Forwarded],
            Self::Reply(_) => &[Received, Described, DecidedMock, Validated, Replied],
            Self::FailOpen(EngineFault::MalformedDescriptor(_)) => &[Received, Forwarded],
            Self::FailOpen(EngineFault::InvalidMockResponse { .. }) => {
                &[Received, Described, DecidedMock, Forwarded]
            }
            Self::FailOpen(_) => &[Received, Described, HookFailed, Forwarded],
        }
    }

    pub fn phase(&self) -> RequestPhase {
        match self {
            Self::Reply(_) => RequestPhase::Replied,
            _ => RequestPhase::Forwarded,
        }
    }
}
