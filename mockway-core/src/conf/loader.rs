use crate::conf::discover::discover;
use crate::conf::lower::build_route_table;
use crate::conf::parse::{parse_entrypoint, parse_rules};
use crate::conf::types::{EngineConfig, MockRouteConfig, Origin, RuntimeConfig, ServerConfig};
use crate::conf::{ConfigError, ValidationIssue};
use std::net::SocketAddr;
use std::path::Path;

pub const ENTRYPOINT_FILE: &str = "mockway.hcl";

/// Load and validate the configuration directory at `root`.
pub fn load_config(root: &Path) -> Result<RuntimeConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let entry_path = root.join(ENTRYPOINT_FILE);
    let entry = parse_entrypoint(&entry_path)?;

    let rule_files = discover(root, &entry.include.rules)?;

    let mut routes: Vec<MockRouteConfig> = Vec::new();
    for path in &rule_files {
        routes.extend(parse_rules(path.as_path())?);
    }

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all semantic errors)
    //--------------------------------------------------------------------------
    let mut issues = validate_server(&entry.server, &Origin::new(&entry_path, "server", None));
    issues.extend(validate_engine(
        &entry.engine,
        &Origin::new(&entry_path, "engine", None),
    ));

    if let Err(ConfigError::Validation { issues: mut route_issues }) = build_route_table(&routes) {
        issues.append(&mut route_issues);
    }
    issues.extend(validate_delays(&routes, &entry.engine));

    if !issues.is_empty() {
        return Err(ConfigError::Validation { issues });
    }

    Ok(RuntimeConfig {
        server: entry.server,
        engine: entry.engine,
        routes,
    })
}

fn validate_server(server: &ServerConfig, origin: &Origin) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if server.version != 1 {
        issues.push(ValidationIssue::new(
            origin,
            format!("unsupported config version {}", server.version),
        ));
    }

    if server.listen.parse::<SocketAddr>().is_err() {
        issues.push(ValidationIssue::new(
            origin,
            format!("invalid listen address '{}'", server.listen),
        ));
    }

    if server.threads == Some(0) {
        issues.push(ValidationIssue::new(origin, "threads must be greater than 0"));
    }

    if let Some(upstream) = &server.upstream
        && split_authority(upstream).is_none()
    {
        issues.push(ValidationIssue::new(
            origin,
            format!("invalid upstream '{upstream}', expected host:port"),
        ));
    }

    issues
}

fn validate_engine(engine: &EngineConfig, origin: &Origin) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if engine.rule_name.trim().is_empty() {
        issues.push(ValidationIssue::new(origin, "rule_name must not be empty"));
    }

    if engine.hook_timeout_ms == 0 {
        issues.push(ValidationIssue::new(
            origin,
            "hook_timeout_ms must be greater than 0",
        ));
    }

    issues
}

/// A route delayed past the hook deadline always times out and is never served.
fn validate_delays(routes: &[MockRouteConfig], engine: &EngineConfig) -> Vec<ValidationIssue> {
    if engine.hook_timeout_ms == 0 {
        return Vec::new();
    }

    routes
        .iter()
        .filter(|r| r.delay_ms.is_some_and(|ms| ms >= engine.hook_timeout_ms))
        .map(|r| {
            ValidationIssue::new(
                &r.origin,
                format!(
                    "mock route '{}' has delay_ms {} but engine.hook_timeout_ms is {}; it would always time out",
                    r.name,
                    r.delay_ms.unwrap_or_default(),
                    engine.hook_timeout_ms
                ),
            )
        })
        .collect()
}

/// Split a "host:port" pair. The port is mandatory.
pub fn split_authority(authority: &str) -> Option<(String, u16)> {
    let (host, port) = authority.rsplit_once(':')?;
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return None;
    }
    let port = port.parse::<u16>().ok().filter(|p| *p > 0)?;
    Some((host.to_string(), port))
}
