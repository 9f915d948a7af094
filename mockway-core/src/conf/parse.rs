use crate::conf::ConfigError;
use crate::conf::types::{EntrypointConfig, MockRouteConfig, Origin};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub fn parse_entrypoint(path: &Path) -> Result<EntrypointConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RulesFile {
    #[serde(default)]
    mock_routes: Vec<MockRouteConfig>,
}

pub fn parse_rules(path: &Path) -> Result<Vec<MockRouteConfig>, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let mut parsed: RulesFile = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    //-------------------------------------------------------------------------
    // Inject origin metadata
    //-------------------------------------------------------------------------
    for (i, route) in parsed.mock_routes.iter_mut().enumerate() {
        route.origin = Origin::new(path, "mock_routes", Some(i));
    }

    Ok(parsed.mock_routes)
}
