use crate::engine::{RequestPhase, Verdict};
use crate::mock::ValidatedResponse;
use crate::runtime::RuntimeState;
use crate::server::target::ForwardTarget;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use http::{Method, StatusCode, Uri, header};
use pingora::prelude::*;
use pingora::protocols::l4::socket::SocketAddr as PingoraSocketAddr;
use pingora_http::{RequestHeader, ResponseHeader};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

pub struct MockwayGateway {
    // Runtime state
    pub state: Arc<ArcSwap<RuntimeState>>,
}

/// Per-request state carried between Pingora phases.
#[derive(Debug, Default)]
pub struct GatewayCtx {
    pub target: Option<ForwardTarget>,
    pub phase: Option<RequestPhase>,
}

#[async_trait]
impl ProxyHttp for MockwayGateway {
    type CTX = GatewayCtx;

    fn new_ctx(&self) -> Self::CTX {
        GatewayCtx::default()
    }

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        ctx: &mut Self::CTX,
    ) -> Result<Box<HttpPeer>> {
        let target = ctx
            .target
            .as_ref()
            .ok_or_else(|| Error::new(Custom("no forward target")))?;

        let peer = HttpPeer::new(
            (target.host.as_str(), target.port),
            target.tls,
            target.host.clone(),
        );

        Ok(Box::new(peer))
    }

    /// Intent:
    /// ACCEPT --> DESCRIBE --> DECIDE --> (REPLY | FORWARD)
    async fn request_filter(&self, session: &mut Session, ctx: &mut Self::CTX) -> Result<bool> {
        // Hold one snapshot for the whole request; reloads do not affect it.
        let state = self.state.load_full();

        let peer_ip = match session.client_addr() {
            Some(PingoraSocketAddr::Inet(addr)) => addr.ip(),
            _ => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let req = session.req_header();
        let verdict = state
            .engine
            .intercept(&req.method, &req.uri, &req.headers, peer_ip)
            .await;
        ctx.phase = Some(verdict.phase());

        if let Verdict::Reply(resp) = &verdict {
            let is_head = session.req_header().method == Method::HEAD;
            write_mock_response(session, resp, is_head).await?;
            return Ok(true);
        }

        let req = session.req_header();
        ctx.target = ForwardTarget::resolve(&req.uri, &req.headers, state.upstream.as_ref());

        if ctx.target.is_none() {
            tracing::warn!(uri = %req.uri, "no forward target for request");
            session.respond_error(502).await?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Forward-proxy requests arrive in absolute form; upstreams expect origin form.
    async fn upstream_request_filter(
        &self,
        _session: &mut Session,
        upstream: &mut RequestHeader,
        _ctx: &mut Self::CTX,
    ) -> Result<()> {
        let Some(authority) = upstream.uri.authority().cloned() else {
            return Ok(());
        };

        if upstream.headers.get(header::HOST).is_none() {
            upstream.insert_header(header::HOST, authority.as_str())?;
        }

        let origin_form: Uri = upstream
            .uri
            .path_and_query()
            .map_or("/", |pq| pq.as_str())
            .parse()
            .map_err(|_| Error::new(Custom("invalid upstream uri")))?;
        upstream.set_uri(origin_form);

        Ok(())
    }

    async fn logging(&self, session: &mut Session, e: Option<&Error>, ctx: &mut Self::CTX)
    where
        Self::CTX: Send + Sync,
    {
        let status = session
            .response_written()
            .map(|resp| resp.status.as_u16())
            .unwrap_or_default();
        let phase = ctx
            .phase
            .map_or_else(|| "unknown".to_string(), |p| p.to_string());

        match e {
            Some(err) => tracing::warn!(
                phase = %phase,
                status,
                error = %err,
                "request finished with error"
            ),
            None => tracing::debug!(
                phase = %phase,
                status,
                "request finished"
            ),
        }
    }
}

/// Write a literal mock response and end the stream.
async fn write_mock_response(
    session: &mut Session,
    resp: &ValidatedResponse,
    is_head: bool,
) -> Result<()> {
    let mut resp_header = ResponseHeader::build(resp.status(), Some(resp.headers().len() + 1))?;

    for (name, value) in resp.headers() {
        resp_header.append_header(name.clone(), value.clone())?;
    }

    // 204 and 304 carry no body and no length. 1xx never get here; validation rejects them.
    let status = resp.status();
    if status_allows_body(status) {
        resp_header.insert_header(header::CONTENT_LENGTH, resp.body().len().to_string())?;
    }

    session.write_response_header(Box::new(resp_header), false).await?;

    if is_head || resp.body().is_empty() || !status_allows_body(status) {
        session.write_response_body(None, true).await?;
    } else {
        session
            .write_response_body(Some(resp.body().clone()), true)
            .await?;
    }

    Ok(())
}

fn status_allows_body(status: StatusCode) -> bool {
    status != StatusCode::NO_CONTENT && status != StatusCode::NOT_MODIFIED
}
