use crate::domain::TimeSnapshot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current server time in several representations, all derived from one
/// clock sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeDto {
    /// ISO-8601 wall-clock time at the server's offset.
    #[schema(example = "2024-01-01T09:00:00.000+09:00")]
    pub iso: String,
    /// RFC 1123 UTC string.
    #[schema(example = "Mon, 01 Jan 2024 00:00:00 GMT")]
    pub utc: String,
    /// Milliseconds since the Unix epoch.
    #[schema(example = 1_704_067_200_000_i64)]
    pub epoch_millis: i64,
    /// IANA timezone name, or `UTC` when it cannot be resolved.
    #[schema(example = "Asia/Tokyo")]
    pub timezone: String,
    #[schema(example = "+09:00", pattern = "^[+-]\\d{2}:\\d{2}$")]
    pub utc_offset: String,
    pub server: ServerInfoDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServerInfoDto {
    #[schema(example = "web-1")]
    pub hostname: String,
    #[schema(example = "production")]
    pub env: String,
}

impl TimeDto {
    pub fn from_snapshot(snapshot: &TimeSnapshot, timezone: String, server: ServerInfoDto) -> Self {
        Self {
            iso: snapshot.iso_local(),
            utc: snapshot.utc_http_date(),
            epoch_millis: snapshot.epoch_millis(),
            timezone,
            utc_offset: snapshot.offset().to_string(),
            server,
        }
    }
}
