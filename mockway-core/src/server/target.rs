use http::uri::Authority;
use http::{HeaderMap, Uri, header};

/// Where a forwarded request goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardTarget {
    pub host: String,
    pub port: u16,
    pub tls: bool,
}

impl ForwardTarget {
    pub fn new(host: impl Into<String>, port: u16, tls: bool) -> Self {
        Self {
            host: host.into(),
            port,
            tls,
        }
    }

    /// Resolve the forward target for a request.
    ///
    /// Resolution order:
    /// 1. A pinned upstream, if configured
    /// 2. The authority of an absolute-form request URI
    /// 3. The `Host` header
    pub fn resolve(uri: &Uri, headers: &HeaderMap, pinned: Option<&(String, u16)>) -> Option<Self> {
        if let Some((host, port)) = pinned {
            return Some(Self::new(host.clone(), *port, false));
        }

        let tls = uri.scheme_str() == Some("https");
        let default_port = if tls { 443 } else { 80 };

        if let Some(authority) = uri.authority() {
            return Some(Self::from_authority(authority, default_port, tls));
        }

        let authority = headers
            .get(header::HOST)?
            .to_str()
            .ok()?
            .parse::<Authority>()
            .ok()?;

        Some(Self::from_authority(&authority, default_port, tls))
    }

    fn from_authority(authority: &Authority, default_port: u16, tls: bool) -> Self {
        let host = authority.host().trim_start_matches('[').trim_end_matches(']');
        Self::new(host, authority.port_u16().unwrap_or(default_port), tls)
    }
}
