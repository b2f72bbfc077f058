// src/presentation/http/controllers/time.rs
use crate::presentation::http::{
    error::HttpResult, middleware::client_addr::ClientAddr, response::render_json,
    state::HttpState,
};
use axum::{Extension, http::StatusCode, response::Response};

#[utoipa::path(
    get,
    path = "/api/v1/time",
    responses(
        (status = 200, description = "Current server time.", body = crate::application::dto::TimeDto)
    ),
    tag = "Time"
)]
pub async fn get_time(
    Extension(state): Extension<HttpState>,
    Extension(client): Extension<ClientAddr>,
) -> HttpResult<Response> {
    let payload = state.services.time_queries.current_time();
    tracing::debug!(
        client = ?client.0,
        epoch_millis = payload.epoch_millis,
        "serving current time"
    );
    render_json(StatusCode::OK, &payload, state.config.pretty_json())
}
