use super::{document::LoadedDocument, openapi_meta::is_not_modified};
use crate::application::error::ApplicationError;
use crate::presentation::http::{error::HttpError, state::HttpState};
use axum::{
    Extension,
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";

fn validator_headers(document: &LoadedDocument) -> [(header::HeaderName, HeaderValue); 2] {
    [
        (header::ETAG, document.etag().clone()),
        (header::LAST_MODIFIED, document.last_modified().clone()),
    ]
}

fn not_modified_response(document: &LoadedDocument) -> Response {
    (StatusCode::NOT_MODIFIED, validator_headers(document)).into_response()
}

fn ok_response(document: &LoadedDocument, body: Body) -> Response {
    (
        StatusCode::OK,
        validator_headers(document),
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(OPENAPI_CONTENT_TYPE_JSON),
            ),
            (
                header::CONTENT_LENGTH,
                HeaderValue::from(document.content_length()),
            ),
        ],
        body,
    )
        .into_response()
}

fn unavailable_response() -> Response {
    HttpError::from_error(ApplicationError::not_found(
        "API documentation is not available",
    ))
    .into_response()
}

/// GET handler for the raw documentation document.
#[utoipa::path(
    get,
    path = "/api-docs.json",
    responses(
        (status = 200, description = "Raw OpenAPI document.", content_type = "application/json"),
        (status = 304, description = "Client copy is current."),
        (status = 404, description = "Documentation failed to load at startup.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Docs"
)]
pub async fn serve_openapi(Extension(state): Extension<HttpState>, headers: HeaderMap) -> Response {
    let Some(document) = state.api_document.document() else {
        return unavailable_response();
    };

    if is_not_modified(&headers, etag_str(document), last_modified_str(document)) {
        return not_modified_response(document);
    }

    ok_response(document, Body::from(document.bytes().clone()))
}

/// HEAD handler: same status and headers as GET, empty body.
pub async fn head_openapi(Extension(state): Extension<HttpState>, headers: HeaderMap) -> Response {
    let Some(document) = state.api_document.document() else {
        return unavailable_response();
    };

    if is_not_modified(&headers, etag_str(document), last_modified_str(document)) {
        return not_modified_response(document);
    }

    ok_response(document, Body::empty())
}

fn etag_str(document: &LoadedDocument) -> &str {
    document.etag().to_str().unwrap_or_default()
}

fn last_modified_str(document: &LoadedDocument) -> &str {
    document.last_modified().to_str().unwrap_or_default()
}

const DOCS_PAGE_TITLE: &str = "Server Time API Docs";
const MAX_DOCS_PAGE_BYTES: usize = 256 * 1024;

/// Replace the `<title>` of an HTML page with [`DOCS_PAGE_TITLE`].
pub fn retitle_html(html: &str) -> String {
    let Some(open) = html.find("<title>") else {
        return html.to_string();
    };
    let start = open + "<title>".len();
    let Some(len) = html[start..].find("</title>") else {
        return html.to_string();
    };
    format!("{}{DOCS_PAGE_TITLE}{}", &html[..start], &html[start + len..])
}

/// Middleware for the Swagger UI routes: the bundled index page is titled
/// "Swagger UI", so HTML responses get the service's own title.
pub async fn brand_docs_page(req: axum::extract::Request, next: axum::middleware::Next) -> Response {
    let resp = next.run(req).await;
    let is_html = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));
    if !is_html {
        return resp;
    }

    let (mut parts, body) = resp.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_DOCS_PAGE_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            return HttpError::from_error(ApplicationError::infrastructure(format!(
                "failed to read documentation page: {err}"
            )))
            .into_response();
        }
    };
    let html = retitle_html(&String::from_utf8_lossy(&bytes));
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(html))
}
