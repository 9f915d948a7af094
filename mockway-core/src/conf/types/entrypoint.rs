use crate::conf::types::{EngineConfig, ServerConfig};
use serde::Deserialize;

/// Represents the top-level `mockway.hcl` file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntrypointConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    pub include: IncludeConfig,
}

/// Glob patterns, relative to the config directory, of files to pull in.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncludeConfig {
    pub rules: String,
}
