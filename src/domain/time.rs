// src/domain/time.rs
use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use std::fmt;

const MAX_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// Local UTC offset in whole minutes, positive east of Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { minutes: 0 };

    /// Offsets are clamped to the range a `FixedOffset` can represent.
    pub fn from_minutes(minutes: i32) -> Self {
        Self {
            minutes: minutes.clamp(-MAX_OFFSET_MINUTES, MAX_OFFSET_MINUTES),
        }
    }

    /// Sub-minute remainders (LMT-era offsets) are truncated toward zero.
    pub fn from_fixed(offset: FixedOffset) -> Self {
        Self::from_minutes(offset.local_minus_utc() / 60)
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    pub fn to_fixed(self) -> FixedOffset {
        FixedOffset::east_opt(self.minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes >= 0 { '+' } else { '-' };
        let abs = self.minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

/// A single clock sample together with the local offset in effect at that
/// instant. Every representation handed out by the service is derived from
/// one of these so fields can never disagree across a second boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    instant: DateTime<Utc>,
    offset: UtcOffset,
}

impl TimeSnapshot {
    pub fn new(instant: DateTime<Utc>, offset: UtcOffset) -> Self {
        Self { instant, offset }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    pub fn epoch_millis(&self) -> i64 {
        self.instant.timestamp_millis()
    }

    /// Wall-clock time at the local offset, e.g. `2024-01-01T09:00:00.000+09:00`.
    pub fn iso_local(&self) -> String {
        self.instant
            .with_timezone(&self.offset.to_fixed())
            .to_rfc3339_opts(SecondsFormat::Millis, false)
    }

    /// IMF-fixdate, e.g. `Mon, 01 Jan 2024 00:00:00 GMT`.
    pub fn utc_http_date(&self) -> String {
        self.instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}
