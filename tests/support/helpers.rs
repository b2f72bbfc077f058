// tests/support/helpers.rs
use super::mocks::{FixedClock, FixedHost, FixedZone};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use server_time::application::services::ApplicationServices;
use server_time::config::AppConfig;
use server_time::presentation::http::{
    openapi::ApiDocument, routes::build_router, state::HttpState,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::util::ServiceExt as _;

/// The `openapi.json` shipped at the crate root.
pub fn shipped_openapi_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("openapi.json")
}

pub fn shipped_document() -> ApiDocument {
    ApiDocument::load(&shipped_openapi_path())
}

pub fn build_test_state(config: AppConfig, zone: FixedZone, document: ApiDocument) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        Arc::new(FixedClock),
        Arc::new(zone),
        Arc::new(FixedHost),
        config.environment(),
    ));
    HttpState::new(services, Arc::new(config), document)
}

/// Router with deterministic clock/zone/host and the shipped document.
pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(
        AppConfig::default(),
        FixedZone::tokyo(),
        shipped_document(),
    ))
}

/// Router whose documentation failed to load.
pub fn make_router_without_docs() -> axum::Router {
    build_router(build_test_state(
        AppConfig::default(),
        FixedZone::tokyo(),
        ApiDocument::unavailable("test: no document"),
    ))
}

pub async fn get(app: axum::Router, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

/// Assert a 200 JSON response and return its parsed body.
pub async fn expect_json_ok(resp: Response) -> Value {
    let status = resp.status();
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = body_bytes(resp).await;
    if status != StatusCode::OK {
        panic!(
            "expected 200 OK, got {}: {}",
            status,
            String::from_utf8_lossy(&bytes)
        );
    }
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value = serde_json::from_slice(&body_bytes(resp).await)
        .expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
