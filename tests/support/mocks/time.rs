// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use server_time::application::ports::time::{Clock, TimeZoneResolver};
use server_time::domain::UtcOffset;

/// Deterministic instant used by tests: 2024-01-01T00:00:00.123Z.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00.123Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Copy)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

#[derive(Clone)]
pub struct FixedZone {
    pub offset_minutes: i32,
    pub name: Option<String>,
}

impl FixedZone {
    pub fn tokyo() -> Self {
        Self {
            offset_minutes: 9 * 60,
            name: Some("Asia/Tokyo".into()),
        }
    }

    pub fn unresolved() -> Self {
        Self {
            offset_minutes: 0,
            name: None,
        }
    }
}

impl TimeZoneResolver for FixedZone {
    fn offset_at(&self, _instant: DateTime<Utc>) -> UtcOffset {
        UtcOffset::from_minutes(self.offset_minutes)
    }

    fn zone_name(&self) -> Option<String> {
        self.name.clone()
    }
}
