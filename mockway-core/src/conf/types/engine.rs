use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Name the mock rule logs under.
    #[serde(default = "default_rule_name")]
    pub rule_name: String,

    /// Deadline for a single decision. Requests whose rule misses it are forwarded.
    #[serde(default = "default_hook_timeout_ms")]
    pub hook_timeout_ms: u64,

    /// Log one line per intercepted URL.
    #[serde(default = "default_log_requests")]
    pub log_requests: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rule_name: default_rule_name(),
            hook_timeout_ms: default_hook_timeout_ms(),
            log_requests: default_log_requests(),
        }
    }
}

fn default_rule_name() -> String {
    "mock_routes".to_string()
}

fn default_hook_timeout_ms() -> u64 {
    2000
}

fn default_log_requests() -> bool {
    true
}
