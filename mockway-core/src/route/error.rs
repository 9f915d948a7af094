use crate::mock::MockResponseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("duplicate mock route '{name}'")]
    DuplicateRoute { name: String },

    #[error("mock route '{name}' has an invalid response: {source}")]
    InvalidResponse {
        name: String,
        #[source]
        source: MockResponseError,
    },

    #[error("mock route '{name}' has an invalid path pattern '{pattern}': {source}")]
    InvalidPattern {
        name: String,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
