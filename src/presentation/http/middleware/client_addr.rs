// src/presentation/http/middleware/client_addr.rs
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, SocketAddr};

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Best guess at the originating client address for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientAddr(pub Option<IpAddr>);

fn parse_addr(raw: &str) -> Option<IpAddr> {
    let raw = raw.trim();
    raw.parse::<IpAddr>()
        .ok()
        .or_else(|| raw.parse::<SocketAddr>().ok().map(|addr| addr.ip()))
}

/// Forwarding headers are only consulted when `trust_proxy` is set; otherwise
/// a client could spoof its address by sending them.
pub fn client_ip(headers: &HeaderMap, peer: Option<IpAddr>, trust_proxy: bool) -> Option<IpAddr> {
    if !trust_proxy {
        return peer;
    }

    let forwarded = headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').find_map(parse_addr));

    forwarded
        .or_else(|| {
            headers
                .get(X_REAL_IP)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_addr)
        })
        .or(peer)
}

pub async fn resolve_client_addr(
    Extension(state): Extension<HttpState>,
    mut req: Request,
    next: Next,
) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let addr = client_ip(req.headers(), peer, state.config.trust_proxy());
    req.extensions_mut().insert(ClientAddr(addr));
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use std::net::Ipv4Addr;

    fn peer() -> Option<IpAddr> {
        Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)))
    }

    fn forwarded(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn ignores_forwarded_headers_unless_trusted() {
        let headers = forwarded("203.0.113.9");
        assert_eq!(client_ip(&headers, peer(), false), peer());
    }

    #[test]
    fn trusted_proxy_uses_left_most_forwarded_entry() {
        let headers = forwarded("203.0.113.9, 198.51.100.2");
        assert_eq!(
            client_ip(&headers, peer(), true),
            Some("203.0.113.9".parse().unwrap())
        );
    }

    #[test]
    fn skips_garbage_and_accepts_ports() {
        let headers = forwarded("unknown, [2001:db8::1]:443");
        assert_eq!(
            client_ip(&headers, peer(), true),
            Some("2001:db8::1".parse().unwrap())
        );
    }

    #[test]
    fn falls_back_to_real_ip_then_peer() {
        let mut headers = HeaderMap::new();
        headers.insert(X_REAL_IP, HeaderValue::from_static("192.0.2.7"));
        assert_eq!(
            client_ip(&headers, peer(), true),
            Some("192.0.2.7".parse().unwrap())
        );
        assert_eq!(client_ip(&HeaderMap::new(), peer(), true), peer());
        assert_eq!(client_ip(&HeaderMap::new(), None, true), None);
    }
}
