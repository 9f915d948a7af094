use crate::conf::types::{EngineConfig, MockResponseConfig, MockRouteConfig, ServerConfig};
use crate::conf::RuntimeConfig;
use crate::engine::Verdict;
use crate::runtime::{build_runtime_state, reload_runtime_state};
use arc_swap::ArcSwap;
use http::{HeaderMap, Method, Uri};
use pretty_assertions::assert_eq;
use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn services_config() -> RuntimeConfig {
    RuntimeConfig {
        server: ServerConfig {
            upstream: Some("127.0.0.1:9000".to_string()),
            ..Default::default()
        },
        engine: EngineConfig {
            hook_timeout_ms: 500,
            ..Default::default()
        },
        routes: vec![MockRouteConfig {
            name: "services".to_string(),
            url_contains: Some("/2016-08-15/services".to_string()),
            response: MockResponseConfig {
                status: 200,
                json: Some(serde_json::json!({ "services": [] })),
                ..Default::default()
            },
            ..Default::default()
        }],
    }
}

async fn intercept(state: &ArcSwap<crate::runtime::RuntimeState>, url: &str) -> Verdict {
    let uri: Uri = url.parse().unwrap();
    state
        .load()
        .engine
        .intercept(
            &Method::GET,
            &uri,
            &HeaderMap::new(),
            IpAddr::V4(Ipv4Addr::LOCALHOST),
        )
        .await
}

fn write_config(root: &Path, rules: &str) {
    fs::create_dir_all(root.join("rules")).unwrap();
    fs::write(
        root.join("mockway.hcl"),
        "include = {\n  rules = \"rules/*.hcl\"\n}\n",
    )
    .unwrap();
    fs::write(root.join("rules/routes.hcl"), rules).unwrap();
}

#[test]
fn build_runtime_state_wires_engine_and_upstream() {
    let state = build_runtime_state(&services_config()).unwrap();

    assert_eq!(state.route_count, 1);
    assert_eq!(state.upstream, Some(("127.0.0.1".to_string(), 9000)));
    assert_eq!(state.engine.rule_name(), "mock_routes");
    assert_eq!(state.engine.hook_timeout(), Duration::from_millis(500));
}

#[tokio::test]
async fn reload_swaps_in_new_routes() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(dir.path(), "mock_routes = []\n");
    let state = ArcSwap::from_pointee(build_runtime_state(&services_config()).unwrap());
    let held = state.load_full();

    assert!(!intercept(&state, "http://fc.example.com/2016-08-15/services")
        .await
        .is_forward());

    // Act
    reload_runtime_state(dir.path(), &state).await.unwrap();

    // Assert
    assert_eq!(state.load().route_count, 0);
    assert!(intercept(&state, "http://fc.example.com/2016-08-15/services")
        .await
        .is_forward());
    // A request that already holds the old state keeps its rules.
    assert_eq!(held.route_count, 1);
}

#[tokio::test]
async fn failed_reload_keeps_current_state() {
    // Arrange
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        r#"
mock_routes = [
  { name = "bad", path_exact = "/x", response = { status = 42 } }
]
"#,
    );
    let state = ArcSwap::from_pointee(build_runtime_state(&services_config()).unwrap());

    // Act
    let result = reload_runtime_state(dir.path(), &state).await;

    // Assert
    assert!(result.is_err());
    assert_eq!(state.load().route_count, 1);
}
