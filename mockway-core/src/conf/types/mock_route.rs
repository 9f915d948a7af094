use crate::conf::types::Origin;
use serde::{Deserialize, Serialize};

/// One entry of a `mock_routes = [...]` list.
///
/// Exactly one of the match fields (`url_contains`, `path_exact`,
/// `path_prefix`, `path_pattern`) must be set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MockRouteConfig {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_contains: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_exact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_pattern: Option<String>,

    /// Restrict to these methods; empty means any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,

    /// Simulated latency before the mock is returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    pub response: MockResponseConfig,

    #[serde(skip_deserializing)]
    pub origin: Origin,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MockResponseConfig {
    pub status: u16,

    /// Written in the order given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HeaderConfig>,

    /// Raw body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Structured JSON body; implies `Content-Type: application/json` unless set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    pub name: String,
    pub value: String,
}
