use integration_tests::harness::TestServer;
use integration_tests::harness::server::captured_events;
use pretty_assertions::assert_eq;
use tracing::Level;

#[test]
fn intercepted_urls_are_logged() {
    // Arrange
    let srv = TestServer::start("basic");

    // Act
    let res = srv.get("/2016-08-15/services?trace=logging").send().unwrap();
    assert_eq!(res.status(), 200);

    // Assert
    let events = captured_events();
    let intercepted = events
        .iter()
        .find(|e| e.is("request intercepted", "trace=logging"))
        .expect("no interception event captured");
    assert_eq!(intercepted.level, Level::INFO);
    assert!(intercepted.target.starts_with("mockway_core"));

    let mocked = events
        .iter()
        .find(|e| e.is("request mocked", "trace=logging"))
        .expect("no mocked event captured");
    assert_eq!(mocked.field("status"), Some("200"));
    assert_eq!(mocked.field("phase"), Some("replied"));
}
