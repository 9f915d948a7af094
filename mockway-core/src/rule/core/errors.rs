use std::fmt::{Display, Formatter};

/// Failure raised by rule code while deciding.
///
/// Rule errors never reach the client; the engine logs them and forwards the
/// request as if the rule had said `Continue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleError {
    /// A descriptive message explaining the error that occurred
    pub message: String,
}

impl RuleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for RuleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RuleError {}
