// src/presentation/http/openapi.rs
mod document;
mod handlers;
mod openapi_meta;
mod openapi_types;

pub use document::{ApiDocument, DocumentError, LoadedDocument};
pub use handlers::{brand_docs_page, head_openapi, retitle_html, serve_openapi};
pub use openapi_meta::{compute_etag, inm_matches, ims_matches, is_not_modified, weak_match};
pub use openapi_types::HealthResponse;

use axum::{Router, middleware, routing::get};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::{Config, SwaggerUi};

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs.json";
pub const OPENAPI_JSON_ALIAS: &str = "/openapi.json";

/// Code-level description of the HTTP surface. The shipped `openapi.json` is
/// generated from this by the `write_openapi_snapshot` binary.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::time::get_time,
        super::routes::health,
        super::routes::root_redirect,
        handlers::serve_openapi
    ),
    components(
        schemas(
            HealthResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::TimeDto,
            crate::application::dto::ServerInfoDto
        )
    ),
    tags(
        (name = "Time", description = "Current server time"),
        (name = "System", description = "Liveness and navigation"),
        (name = "Docs", description = "Machine-readable API documentation")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Server Time API",
        description = "Reports the server's current time in several representations.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        // A relative server keeps "try it out" working behind any host name.
        if urls.is_empty() {
            servers.push(Server::new("/"));
            return;
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Routes serving the documentation document and, when it loaded, the
/// Swagger UI browser on top of it.
pub fn docs_router(document: &ApiDocument) -> Router {
    let router = Router::new()
        .route(OPENAPI_JSON_PATH, get(serve_openapi).head(head_openapi))
        .route(OPENAPI_JSON_ALIAS, get(serve_openapi).head(head_openapi));

    if document.is_loaded() {
        let swagger = SwaggerUi::new(DOCS_PATH).config(Config::new([OPENAPI_JSON_PATH]));
        router.merge(Router::<()>::from(swagger).layer(middleware::from_fn(brand_docs_page)))
    } else {
        router
    }
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
