use crate::mock::{MockResponse, MockResponseError};
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn json_response_sets_content_type_and_body() {
    // Act
    let resp = MockResponse::json(200, &json!({"ok": true}));

    // Assert
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.content_type(), Some("application/json"));
    assert!(resp.declares_json());
    let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body, json!({"ok": true}));
}

#[test]
fn headers_keep_insertion_order() {
    // Arrange
    let resp = MockResponse::new(200)
        .with_header("X-B", "2")
        .with_header("X-A", "1")
        .with_header("Content-Type", "text/plain");

    // Act
    let validated = resp.validate().unwrap();

    // Assert
    let names: Vec<&str> = validated.headers().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["x-b", "x-a", "content-type"]);
}

#[test]
fn header_lookup_ignores_case() {
    let resp = MockResponse::new(200).with_header("content-TYPE", "application/json");

    assert_eq!(resp.header("Content-Type"), Some("application/json"));
}

#[test]
fn validate_accepts_status_boundaries() {
    assert_eq!(
        MockResponse::new(200).validate().unwrap().status(),
        StatusCode::OK
    );
    assert_eq!(MockResponse::new(599).validate().unwrap().status().as_u16(), 599);
}

#[test]
fn validate_rejects_informational_statuses() {
    for status in [100, 101, 103, 199] {
        let err = MockResponse::new(status).validate().unwrap_err();

        assert_eq!(err, MockResponseError::InformationalStatus { status });
        assert_eq!(err.kind(), "informational_status");
    }
}

#[test]
fn validate_rejects_status_999() {
    let err = MockResponse::new(999).validate().unwrap_err();

    assert_eq!(err, MockResponseError::StatusOutOfRange { status: 999 });
}

#[test]
fn validate_rejects_status_below_100() {
    let err = MockResponse::new(42).validate().unwrap_err();

    assert_eq!(err, MockResponseError::StatusOutOfRange { status: 42 });
}

#[test]
fn validate_rejects_declared_json_that_does_not_parse() {
    // Arrange
    let resp = MockResponse::new(200)
        .with_header("Content-Type", "application/json; charset=utf-8")
        .with_body("{\"services\": [");

    // Act
    let err = resp.validate().unwrap_err();

    // Assert
    assert!(matches!(err, MockResponseError::InvalidJsonBody { .. }));
}

#[test]
fn validate_checks_structured_json_suffix() {
    let resp = MockResponse::new(200)
        .with_header("Content-Type", "application/problem+json")
        .with_body("not json");

    assert!(matches!(
        resp.validate(),
        Err(MockResponseError::InvalidJsonBody { .. })
    ));
}

#[test]
fn validate_ignores_body_of_non_json_types() {
    let resp = MockResponse::new(200)
        .with_header("Content-Type", "text/plain")
        .with_body("{ not json");

    assert!(resp.validate().is_ok());
}

#[test]
fn validate_rejects_bad_header_name() {
    let err = MockResponse::new(200)
        .with_header("bad header", "x")
        .validate()
        .unwrap_err();

    assert_eq!(
        err,
        MockResponseError::InvalidHeaderName {
            name: "bad header".to_string()
        }
    );
}

#[test]
fn validate_rejects_bad_header_value() {
    let err = MockResponse::new(200)
        .with_header("x-ok", "line\nbreak")
        .validate()
        .unwrap_err();

    assert!(matches!(err, MockResponseError::InvalidHeaderValue { .. }));
}
