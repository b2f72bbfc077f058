// src/presentation/http/openapi/document.rs
use super::openapi_meta::compute_etag;
use axum::http::HeaderValue;
use bytes::Bytes;
use serde_json::Value;
use std::{
    fmt, io,
    path::Path,
    sync::Arc,
    time::SystemTime,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] io::Error),
    #[error("document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document is not an OpenAPI description: {0}")]
    Shape(&'static str),
}

/// The documentation document as served to clients: raw bytes plus the
/// validators computed once at load time.
pub struct LoadedDocument {
    bytes: Bytes,
    etag: HeaderValue,
    last_modified: HeaderValue,
}

impl LoadedDocument {
    pub fn parse(bytes: impl Into<Bytes>, modified: SystemTime) -> Result<Self, DocumentError> {
        let bytes = bytes.into();
        let value: Value = serde_json::from_slice(&bytes)?;
        let root = value
            .as_object()
            .ok_or(DocumentError::Shape("root must be a JSON object"))?;
        root.get("openapi")
            .and_then(Value::as_str)
            .ok_or(DocumentError::Shape("missing string field `openapi`"))?;
        root.get("paths")
            .filter(|paths| paths.is_object())
            .ok_or(DocumentError::Shape("missing object field `paths`"))?;

        let etag = HeaderValue::from_str(&compute_etag(&bytes))
            .map_err(|_| DocumentError::Shape("unrepresentable ETag"))?;
        let last_modified = HeaderValue::from_str(&httpdate::fmt_http_date(modified))
            .map_err(|_| DocumentError::Shape("unrepresentable modification time"))?;

        Ok(Self {
            bytes,
            etag,
            last_modified,
        })
    }

    pub fn read(path: &Path) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path)?;
        let modified = std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .unwrap_or_else(|_| SystemTime::now());
        Self::parse(bytes, modified)
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }

    pub fn etag(&self) -> &HeaderValue {
        &self.etag
    }

    pub fn last_modified(&self) -> &HeaderValue {
        &self.last_modified
    }
}

impl fmt::Debug for LoadedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedDocument")
            .field("len", &self.bytes.len())
            .field("etag", &self.etag)
            .field("last_modified", &self.last_modified)
            .finish()
    }
}

/// Outcome of the best-effort startup load. Documentation routes consult
/// this; nothing else does.
#[derive(Clone, Debug)]
pub enum ApiDocument {
    Loaded(Arc<LoadedDocument>),
    Unavailable(Arc<str>),
}

impl ApiDocument {
    /// Load the document at `path`. Never fails: problems are logged and
    /// turned into [`ApiDocument::Unavailable`].
    pub fn load(path: &Path) -> Self {
        match LoadedDocument::read(path) {
            Ok(document) => {
                tracing::info!(
                    path = %path.display(),
                    bytes = document.content_length(),
                    "loaded API documentation"
                );
                Self::Loaded(Arc::new(document))
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "API documentation unavailable; documentation routes disabled"
                );
                Self::unavailable(err.to_string())
            }
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(Arc::from(reason.into()))
    }

    pub fn document(&self) -> Option<&LoadedDocument> {
        match self {
            Self::Loaded(document) => Some(document.as_ref()),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}
