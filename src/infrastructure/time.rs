// src/infrastructure/time.rs
use crate::application::ports::time::{Clock, TimeZoneResolver};
use crate::domain::UtcOffset;
use chrono::{DateTime, Local, Offset, Utc};
use std::env;

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Host timezone as seen by the C library (`TZ`, `/etc/localtime`).
///
/// The IANA name is resolved once; the offset is computed per instant so DST
/// transitions are picked up without a restart.
#[derive(Clone, Debug)]
pub struct SystemTimeZone {
    name: Option<String>,
}

impl SystemTimeZone {
    pub fn detect() -> Self {
        let name = zone_from_tz_var(env::var("TZ").ok().as_deref()).or_else(|| {
            iana_time_zone::get_timezone()
                .inspect_err(|err| tracing::debug!(error = %err, "could not resolve system timezone"))
                .ok()
        });
        tracing::debug!(timezone = ?name, "resolved host timezone");
        Self { name }
    }
}

impl Default for SystemTimeZone {
    fn default() -> Self {
        Self::detect()
    }
}

impl TimeZoneResolver for SystemTimeZone {
    fn offset_at(&self, instant: DateTime<Utc>) -> UtcOffset {
        UtcOffset::from_fixed(instant.with_timezone(&Local).offset().fix())
    }

    fn zone_name(&self) -> Option<String> {
        self.name.clone()
    }
}

/// Extract an IANA name from a `TZ` value. POSIX rule strings such as
/// `EST5EDT` carry no IANA name and yield `None`.
fn zone_from_tz_var(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim().trim_start_matches(':');
    let value = match value.find("zoneinfo/") {
        Some(idx) => &value[idx + "zoneinfo/".len()..],
        None => value,
    };
    if value.is_empty() || value.starts_with('/') {
        return None;
    }
    let is_posix_rule = !value.contains('/') && value.chars().any(|c| c.is_ascii_digit());
    if is_posix_rule {
        return None;
    }
    Some(value.to_string())
}
