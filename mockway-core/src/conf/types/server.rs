use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8001";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// e.g. "127.0.0.1:8001"
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Optional number of worker threads - default is decided by Pingora.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Optional pid file path, needed by `mockway reload`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid_file: Option<PathBuf>,

    /// Pin every forwarded request to this "host:port" instead of the
    /// request's own authority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            listen: default_listen(),
            threads: None,
            pid_file: None,
            upstream: None,
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}
