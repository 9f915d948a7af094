use crate::cli::render;
use crate::conf::types::{MockResponseConfig, MockRouteConfig, RuntimeConfig};

fn config() -> RuntimeConfig {
    RuntimeConfig {
        server: Default::default(),
        engine: Default::default(),
        routes: vec![MockRouteConfig {
            name: "services".to_string(),
            url_contains: Some("/2016-08-15/services".to_string()),
            response: MockResponseConfig {
                status: 200,
                ..Default::default()
            },
            ..Default::default()
        }],
    }
}

#[test]
fn render_json_omits_unset_match_fields() {
    let out = render(&config(), false).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let route = &value["routes"][0];
    assert_eq!(route["url_contains"], "/2016-08-15/services");
    assert!(route.get("path_exact").is_none());
    assert_eq!(value["server"]["listen"], "127.0.0.1:8001");
}

#[test]
fn render_yaml() {
    let out = render(&config(), true).unwrap();

    assert!(out.contains("url_contains: /2016-08-15/services"));
    assert!(out.contains("hook_timeout_ms: 2000"));
}
