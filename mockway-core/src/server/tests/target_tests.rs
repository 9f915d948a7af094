use crate::server::ForwardTarget;
use http::{HeaderMap, HeaderValue, Uri, header};
use pretty_assertions::assert_eq;

fn host_header(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static(value));
    headers
}

#[test]
fn absolute_form_uses_its_authority() {
    let uri: Uri = "http://fc.example.com:8080/2016-08-15/services".parse().unwrap();

    let target = ForwardTarget::resolve(&uri, &HeaderMap::new(), None);

    assert_eq!(target, Some(ForwardTarget::new("fc.example.com", 8080, false)));
}

#[test]
fn https_absolute_form_defaults_to_443_with_tls() {
    let uri: Uri = "https://fc.example.com/x".parse().unwrap();

    let target = ForwardTarget::resolve(&uri, &HeaderMap::new(), None);

    assert_eq!(target, Some(ForwardTarget::new("fc.example.com", 443, true)));
}

#[test]
fn origin_form_falls_back_to_host_header() {
    let uri: Uri = "/2016-08-15/functions".parse().unwrap();

    let target = ForwardTarget::resolve(&uri, &host_header("backend.local"), None);

    assert_eq!(target, Some(ForwardTarget::new("backend.local", 80, false)));
}

#[test]
fn pinned_upstream_wins() {
    // Arrange
    let uri: Uri = "http://fc.example.com/x".parse().unwrap();
    let pinned = ("127.0.0.1".to_string(), 9000);

    // Act
    let target = ForwardTarget::resolve(&uri, &host_header("other.local"), Some(&pinned));

    // Assert
    assert_eq!(target, Some(ForwardTarget::new("127.0.0.1", 9000, false)));
}

#[test]
fn no_authority_and_no_host_is_none() {
    let uri: Uri = "/x".parse().unwrap();

    assert_eq!(ForwardTarget::resolve(&uri, &HeaderMap::new(), None), None);
}

#[test]
fn ipv6_host_header_is_unbracketed() {
    let uri: Uri = "/x".parse().unwrap();

    let target = ForwardTarget::resolve(&uri, &host_header("[::1]:8080"), None);

    assert_eq!(target, Some(ForwardTarget::new("::1", 8080, false)));
}
