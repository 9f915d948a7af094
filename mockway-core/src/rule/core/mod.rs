pub mod decision;
pub mod errors;

pub use self::decision::Decision;
pub use self::errors::RuleError;
use crate::ctx::RequestDescriptor;
use async_trait::async_trait;

/// The single extension point where interception policy lives.
///
/// The proxy engine calls `decide` exactly once per intercepted request.
/// Implementations must be both Send and Sync: many requests are decided
/// concurrently against the same rule instance.
///
/// `decide` is async so a rule can await external state (a lookup, a delay)
/// without holding up other in-flight requests. It has to resolve before the
/// engine's hook deadline, otherwise the request is forwarded unchanged.
///
/// Returning `Err` (or panicking) never breaks the proxy: the engine catches it
/// at the invocation boundary and forwards the request.
#[async_trait]
pub trait Rule: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Inspect the request and either let it through or short-circuit it.
    async fn decide(&self, req: &RequestDescriptor) -> Result<Decision, RuleError>;
}
