use crate::conf::types::{MockResponseConfig, MockRouteConfig, Origin};
use crate::conf::{ConfigError, ValidationIssue};
use crate::mock::MockResponse;
use crate::route::{RouteEntry, RouteError, RouteSpec, RouteTable};
use http::{Method, header};
use smallvec::SmallVec;
use std::time::Duration;

/// Lower every configured route into a table, in declaration order.
///
/// All problems across all routes are collected before failing.
pub fn build_route_table(routes: &[MockRouteConfig]) -> Result<RouteTable, ConfigError> {
    let mut table = RouteTable::new();
    let mut issues = Vec::new();

    for cfg in routes {
        match lower_route(cfg) {
            Ok(entry) => {
                if let Err(err) = table.add(entry) {
                    issues.push(route_error_issue(&cfg.origin, err));
                }
            }
            Err(mut errs) => issues.append(&mut errs),
        }
    }

    if issues.is_empty() {
        Ok(table)
    } else {
        Err(ConfigError::Validation { issues })
    }
}

/// Turn one route declaration into a `RouteEntry`.
pub fn lower_route(cfg: &MockRouteConfig) -> Result<RouteEntry, Vec<ValidationIssue>> {
    let origin = &cfg.origin;
    let mut issues = Vec::new();

    if cfg.name.trim().is_empty() {
        issues.push(ValidationIssue::new(origin, "mock route name must not be empty"));
    }

    let spec = lower_spec(cfg).map_err(|msg| issues.push(ValidationIssue::new(origin, msg)));

    let methods: SmallVec<[Method; 4]> = cfg
        .methods
        .iter()
        .filter_map(|m| match Method::from_bytes(m.to_ascii_uppercase().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                issues.push(ValidationIssue::new(
                    origin,
                    format!("invalid HTTP method '{m}'"),
                ));
                None
            }
        })
        .collect();

    let response =
        lower_response(&cfg.response).map_err(|msg| issues.push(ValidationIssue::new(origin, msg)));

    match (spec, response) {
        (Ok(spec), Ok(response)) if issues.is_empty() => {
            let mut entry = RouteEntry::new(cfg.name.clone(), spec, response).with_methods(methods);
            if let Some(ms) = cfg.delay_ms.filter(|ms| *ms > 0) {
                entry = entry.with_delay(Duration::from_millis(ms));
            }
            Ok(entry)
        }
        _ => Err(issues),
    }
}

fn lower_spec(cfg: &MockRouteConfig) -> Result<RouteSpec, String> {
    let declared: Vec<&'static str> = [
        ("url_contains", cfg.url_contains.is_some()),
        ("path_exact", cfg.path_exact.is_some()),
        ("path_prefix", cfg.path_prefix.is_some()),
        ("path_pattern", cfg.path_pattern.is_some()),
    ]
    .into_iter()
    .filter_map(|(field, set)| set.then_some(field))
    .collect();

    if declared.len() != 1 {
        return Err(format!(
            "exactly one of url_contains, path_exact, path_prefix, path_pattern must be set (found {})",
            if declared.is_empty() {
                "none".to_string()
            } else {
                declared.join(", ")
            }
        ));
    }

    if let Some(needle) = &cfg.url_contains {
        if needle.is_empty() {
            return Err("url_contains must not be empty".to_string());
        }
        return Ok(RouteSpec::UrlContains(needle.clone()));
    }

    if let Some(path) = &cfg.path_exact {
        require_absolute_path("path_exact", path)?;
        return Ok(RouteSpec::ExactPath(path.clone()));
    }

    if let Some(prefix) = &cfg.path_prefix {
        require_absolute_path("path_prefix", prefix)?;
        return Ok(RouteSpec::PathPrefix(prefix.clone()));
    }

    let pattern = cfg.path_pattern.as_deref().unwrap_or_default();
    require_absolute_path("path_pattern", pattern)?;
    RouteSpec::pattern(pattern).map_err(|source| {
        RouteError::InvalidPattern {
            name: cfg.name.clone(),
            pattern: pattern.to_string(),
            source,
        }
        .to_string()
    })
}

fn require_absolute_path(field: &str, path: &str) -> Result<(), String> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(format!("{field} '{path}' must start with '/'"))
    }
}

fn lower_response(cfg: &MockResponseConfig) -> Result<MockResponse, String> {
    let mut response = MockResponse::new(cfg.status);

    for h in &cfg.headers {
        response = response.with_header(h.name.clone(), h.value.clone());
    }

    response = match (&cfg.body, &cfg.json) {
        (Some(_), Some(_)) => return Err("response may set body or json, not both".to_string()),
        (Some(body), None) => response.with_body(body.clone()),
        (None, Some(json)) => {
            if response.content_type().is_none() {
                response = response.with_header(header::CONTENT_TYPE.as_str(), "application/json");
            }
            response.with_body(json.to_string())
        }
        (None, None) => response,
    };

    response
        .validate()
        .map_err(|e| format!("invalid response: {e}"))?;

    Ok(response)
}

fn route_error_issue(origin: &Origin, err: RouteError) -> ValidationIssue {
    ValidationIssue::new(origin, err.to_string())
}
