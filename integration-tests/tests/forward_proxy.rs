use integration_tests::harness::TestServer;
use pretty_assertions::assert_eq;

#[test]
fn absolute_url_is_mocked_without_reaching_the_host() {
    // Arrange
    let srv = TestServer::start("forward");

    // Act
    let res = srv
        .get_via_proxy("http://fc.mockway.invalid/2016-08-15/services")
        .send()
        .unwrap();

    // Assert
    assert_eq!(res.status(), 200);
    let body: serde_json::Value = res.json().unwrap();
    assert_eq!(body["services"][0]["serviceName"], "demo");
}

#[test]
fn absolute_url_is_forwarded_to_its_own_host_in_origin_form() {
    // Arrange
    let srv = TestServer::start("forward");
    let upstream = srv.upstream_url();

    // Act
    let res = srv
        .get_via_proxy(&format!("{upstream}/2016-08-15/functions?x=1"))
        .send()
        .unwrap();

    // Assert
    assert_eq!(res.status(), 200);
    let authority = upstream.trim_start_matches("http://");
    assert_eq!(
        res.text().unwrap(),
        format!("upstream GET /2016-08-15/functions?x=1 host={authority}")
    );
}
