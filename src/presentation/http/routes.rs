// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::time,
    error::HttpResult,
    middleware::client_addr::resolve_client_addr,
    openapi::{self, DOCS_PATH, HealthResponse},
    response::render_json,
};
use axum::{
    Extension, Router,
    http::{Method, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router(&state.api_document))
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .route("/healthz", get(health))
        .route("/api/v1/time", get(time::get_time))
        .route("/api/time", get(time::get_time))
        .layer(middleware::from_fn(resolve_client_addr))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Liveness probe. Deliberately independent of the documentation document.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running.", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let body = HealthResponse {
        status: "ok".into(),
        uptime: state.uptime_secs(),
    };
    render_json(StatusCode::OK, &body, state.config.pretty_json())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 302, description = "Redirect to the documentation browser.",
            headers(("Location" = String, description = "Always `/docs`")))
    ),
    tag = "System"
)]
pub async fn root_redirect() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, DOCS_PATH)]).into_response()
}
