//! Response types that only exist for the HTTP surface.
use serde::{Deserialize, Serialize};

/// Liveness probe body.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving requests.
    #[schema(example = "ok")]
    pub status: String,
    /// Seconds since the service started.
    #[schema(example = 12.5)]
    pub uptime: f64,
}
