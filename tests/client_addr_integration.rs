// tests/client_addr_integration.rs
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode};
use axum::{Extension, Router, middleware, routing::get};
use server_time::config::AppConfig;
use server_time::presentation::http::middleware::client_addr::{ClientAddr, resolve_client_addr};
use std::net::SocketAddr;
use tower::util::ServiceExt as _;

mod support;

const PEER: &str = "10.0.0.1:52000";

async fn echo_client(Extension(client): Extension<ClientAddr>) -> String {
    client
        .0
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Same layer order as `build_router`, with a handler exposing the resolved address.
fn echo_router(trust_proxy: bool) -> Router {
    let config = AppConfig::default().with_trust_proxy(trust_proxy);
    let state = support::build_test_state(
        config,
        support::FixedZone::tokyo(),
        support::shipped_document(),
    );
    Router::new()
        .route("/client", get(echo_client))
        .layer(middleware::from_fn(resolve_client_addr))
        .layer(Extension(state))
}

async fn resolved_client(app: Router, forwarded_for: Option<&str>) -> String {
    let mut builder = Request::builder().uri("/client");
    if let Some(value) = forwarded_for {
        builder = builder.header("x-forwarded-for", value);
    }
    let mut req = builder.body(Body::empty()).unwrap();
    let peer: SocketAddr = PEER.parse().unwrap();
    req.extensions_mut().insert(ConnectInfo(peer));

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    String::from_utf8(support::body_bytes(resp).await).unwrap()
}

#[tokio::test]
async fn untrusted_proxy_reports_the_socket_peer() {
    let client = resolved_client(echo_router(false), Some("203.0.113.9")).await;
    assert_eq!(client, "10.0.0.1");
}

#[tokio::test]
async fn trusted_proxy_reports_the_forwarded_client() {
    let client = resolved_client(echo_router(true), Some("203.0.113.9, 10.0.0.1")).await;
    assert_eq!(client, "203.0.113.9");
}

#[tokio::test]
async fn trusted_proxy_without_headers_falls_back_to_peer() {
    let client = resolved_client(echo_router(true), None).await;
    assert_eq!(client, "10.0.0.1");
}

#[tokio::test]
async fn time_route_sees_the_resolved_address_layer() {
    // build_router must install the middleware, otherwise the handler's
    // Extension<ClientAddr> extractor would reject the request with a 500.
    let state = support::build_test_state(
        AppConfig::default().with_trust_proxy(true),
        support::FixedZone::tokyo(),
        support::shipped_document(),
    );
    let req = Request::builder()
        .uri("/api/v1/time")
        .header("x-forwarded-for", "203.0.113.9")
        .body(Body::empty())
        .unwrap();
    let resp = server_time::presentation::http::routes::build_router(state)
        .oneshot(req)
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
