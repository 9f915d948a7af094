use crate::ctx::{DescriptorError, RequestId};
use bytes::Bytes;
use http::header::{AsHeaderName, HOST};
use http::{HeaderMap, Method, Uri};
use std::net::{IpAddr, Ipv4Addr};
use url::Url;

/// Read-only snapshot of an intercepted request, handed to rule code.
///
/// A descriptor is a copy of metadata the transport has already buffered, so
/// building one never touches the network. Rules only ever receive
/// `&RequestDescriptor`; there is no way for them to mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    request_id: RequestId,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Bytes,
    peer_ip: IpAddr,
}

impl RequestDescriptor {
    /// Build a descriptor from an absolute URL.
    pub fn new(
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: impl Into<Bytes>,
    ) -> Result<Self, DescriptorError> {
        let url = parse_absolute_url(url)?;

        Ok(Self {
            request_id: RequestId::default(),
            method,
            url,
            headers,
            body: body.into(),
            peer_ip: Ipv4Addr::UNSPECIFIED.into(),
        })
    }

    /// Build a descriptor from request-line parts as a proxy sees them.
    ///
    /// Absolute-form targets (forward proxy traffic) are used verbatim.
    /// Origin-form targets are completed from the `Host` header.
    /// The body is never read here; it would mean waiting on the client.
    pub fn from_parts(
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        peer_ip: IpAddr,
    ) -> Result<Self, DescriptorError> {
        let raw = match (uri.scheme_str(), uri.authority()) {
            (Some(_), Some(_)) => uri.to_string(),
            _ => {
                let host = headers
                    .get(HOST)
                    .and_then(|v| v.to_str().ok())
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .ok_or(DescriptorError::MissingHost)?;

                let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

                format!("http://{host}{path_and_query}")
            }
        };

        Ok(Self::new(method.clone(), &raw, headers.clone(), Bytes::new())?.with_peer_ip(peer_ip))
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn with_peer_ip(mut self, peer_ip: IpAddr) -> Self {
        self.peer_ip = peer_ip;
        self
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Full URL as a string (scheme, host, path, query). Never empty.
    pub fn url_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of a header, if present and valid UTF-8. Lookup is case-insensitive.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// All values of a header in the order they were received.
    pub fn header_values<K: AsHeaderName>(&self, name: K) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn peer_ip(&self) -> IpAddr {
        self.peer_ip
    }
}

fn parse_absolute_url(raw: &str) -> Result<Url, DescriptorError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DescriptorError::EmptyUrl);
    }

    let url = Url::parse(raw).map_err(|e| DescriptorError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !url.has_host() {
        return Err(DescriptorError::MissingHost);
    }

    Ok(url)
}
