//! Synthesized responses a rule can hand back instead of forwarding.
//!
//! A `MockResponse` is what rule code builds. Before anything reaches the
//! wire it has to pass `MockResponse::validate`, which yields the only type the
//! transport adapter accepts: `ValidatedResponse`.

mod error;
mod response;
#[cfg(test)]
mod tests;

pub use error::MockResponseError;
pub use response::{MockResponse, ValidatedResponse};
