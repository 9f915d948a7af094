use crate::mock::MockResponse;

/// What a rule wants done with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Forward the original request unchanged.
    Continue,

    /// Stop here and reply to the client with this response.
    Mock(MockResponse),
}

impl Decision {
    pub fn is_continue(&self) -> bool {
        matches!(self, Decision::Continue)
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, Decision::Mock(_))
    }
}
