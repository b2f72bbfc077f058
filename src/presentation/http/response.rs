// src/presentation/http/response.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

fn encode<T: Serialize>(value: &T, pretty: bool) -> ApplicationResult<Vec<u8>> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    };
    encoded.map_err(|err| ApplicationError::infrastructure(format!("failed to encode response: {err}")))
}

/// Render `value` as a JSON response, indented when `pretty` is set.
pub fn render_json<T: Serialize>(status: StatusCode, value: &T, pretty: bool) -> HttpResult<Response> {
    let body = encode(value, pretty).into_http()?;
    Ok((
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body;
    use serde_json::json;

    async fn body_string(resp: Response) -> String {
        let bytes = body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn compact_by_default() {
        let resp = render_json(StatusCode::OK, &json!({ "status": "ok" }), false).unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(resp).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn pretty_output_is_indented() {
        let resp = render_json(StatusCode::OK, &json!({ "status": "ok" }), true).unwrap();
        assert_eq!(body_string(resp).await, "{\n  \"status\": \"ok\"\n}");
    }
}
