use crate::conf::ConfigError;
use crate::conf::parse::{parse_entrypoint, parse_rules};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn parse_rules_injects_origin() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("services.hcl");

    fs::write(
        &path,
        r#"
mock_routes = [
  {
    name         = "list_services"
    url_contains = "/2016-08-15/services"
    response = {
      status = 200
      json   = { services = [ { serviceName = "demo", description = "" } ] }
    }
  },
  {
    name       = "health"
    path_exact = "/healthz"
    methods    = ["GET"]
    response = {
      status = 204
    }
  }
]
"#,
    )
    .unwrap();

    // Act
    let routes = parse_rules(&path).unwrap();

    // Assert
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].name, "list_services");
    assert_eq!(routes[0].origin.section, "mock_routes");
    assert_eq!(routes[0].origin.index, Some(0));
    assert_eq!(routes[1].origin.index, Some(1));
    assert_eq!(routes[1].methods, vec!["GET".to_string()]);
    assert_eq!(
        routes[0].response.json,
        Some(serde_json::json!({
            "services": [{ "serviceName": "demo", "description": "" }]
        }))
    );
}

#[test]
fn parse_rules_empty_file_is_ok() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.hcl");
    fs::write(&path, "").unwrap();

    let routes = parse_rules(&path).unwrap();

    assert!(routes.is_empty());
}

#[test]
fn parse_rules_unknown_field_is_parse_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.hcl");
    fs::write(
        &path,
        r#"
mock_routes = [
  {
    name       = "typo"
    path_exakt = "/x"
    response   = { status = 200 }
  }
]
"#,
    )
    .unwrap();

    // Act
    let err = parse_rules(&path).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn parse_entrypoint_applies_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("mockway.hcl");
    fs::write(
        &path,
        r#"
include = {
  rules = "rules/*.hcl"
}
"#,
    )
    .unwrap();

    // Act
    let entry = parse_entrypoint(&path).unwrap();

    // Assert
    assert_eq!(entry.server.version, 1);
    assert_eq!(entry.server.listen, "127.0.0.1:8001");
    assert_eq!(entry.engine.hook_timeout_ms, 2000);
    assert!(entry.engine.log_requests);
    assert_eq!(entry.include.rules, "rules/*.hcl");
}

#[test]
fn parse_entrypoint_missing_file_is_read_error() {
    let dir = tempdir().unwrap();

    let err = parse_entrypoint(&dir.path().join("mockway.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}
