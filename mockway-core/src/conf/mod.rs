mod discover;
mod error;
mod loader;
mod lower;
mod parse;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::{ConfigError, ValidationIssue};
pub use loader::{ENTRYPOINT_FILE, load_config, split_authority};
pub use lower::{build_route_table, lower_route};
pub use types::RuntimeConfig;
