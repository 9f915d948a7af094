//! The invocation boundary between the proxy and rule code.
//!
//! ```text
//! Received -> Described -> Decided:Continue -> Forwarded
//!                       -> Decided:Mock -> Validated -> Replied
//!                       -> HookFailed -> Forwarded
//! ```
//!
//! Anything going wrong on the rule side (errors, panics, missed deadlines,
//! unusable responses) ends in `Forwarded`: a broken rule never breaks the proxy.

mod engine;
mod fault;
mod verdict;
#[cfg(test)]
mod tests;

pub use engine::{DEFAULT_HOOK_TIMEOUT, RuleEngine};
pub use fault::EngineFault;
pub use verdict::{RequestPhase, Verdict};
