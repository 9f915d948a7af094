use thiserror::Error;

/// Raised when request metadata cannot be turned into a descriptor.
///
/// Descriptor errors are surfaced to the engine, never to rule code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("request url is empty")]
    EmptyUrl,

    #[error("request has no authority and no usable Host header")]
    MissingHost,

    #[error("request url '{url}' is not a valid absolute url: {reason}")]
    InvalidUrl { url: String, reason: String },
}
