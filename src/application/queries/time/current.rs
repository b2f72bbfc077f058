use super::TimeQueryService;
use crate::{
    application::dto::{ServerInfoDto, TimeDto},
    domain::TimeSnapshot,
};

const FALLBACK_ZONE: &str = "UTC";

impl TimeQueryService {
    /// Sample the clock once and describe that instant.
    pub fn current_time(&self) -> TimeDto {
        let instant = self.clock.now();
        let snapshot = TimeSnapshot::new(instant, self.zones.offset_at(instant));

        let timezone = self
            .zones
            .zone_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ZONE.to_string());

        let server = ServerInfoDto {
            hostname: self.host.hostname(),
            env: self.environment.clone(),
        };

        TimeDto::from_snapshot(&snapshot, timezone, server)
    }
}
