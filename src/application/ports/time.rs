// src/application/ports/time.rs
use crate::domain::UtcOffset;
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Answers timezone questions about the host.
pub trait TimeZoneResolver: Send + Sync {
    /// Local offset in effect at `instant` (DST-aware).
    fn offset_at(&self, instant: DateTime<Utc>) -> UtcOffset;

    /// IANA identifier such as `Europe/Helsinki`, when one can be determined.
    fn zone_name(&self) -> Option<String>;
}
