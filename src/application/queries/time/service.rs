use std::sync::Arc;

use crate::application::ports::{host::HostIdentity, time::{Clock, TimeZoneResolver}};

pub struct TimeQueryService {
    pub(super) clock: Arc<dyn Clock>,
    pub(super) zones: Arc<dyn TimeZoneResolver>,
    pub(super) host: Arc<dyn HostIdentity>,
    pub(super) environment: String,
}

impl TimeQueryService {
    pub fn new(
        clock: Arc<dyn Clock>,
        zones: Arc<dyn TimeZoneResolver>,
        host: Arc<dyn HostIdentity>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            clock,
            zones,
            host,
            environment: environment.into(),
        }
    }
}
