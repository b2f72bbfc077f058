// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{
    ports::{
        host::HostIdentity,
        time::{Clock, TimeZoneResolver},
    },
    queries::time::TimeQueryService,
};

pub struct ApplicationServices {
    pub time_queries: Arc<TimeQueryService>,
}

impl ApplicationServices {
    pub fn new(
        clock: Arc<dyn Clock>,
        zones: Arc<dyn TimeZoneResolver>,
        host: Arc<dyn HostIdentity>,
        environment: impl Into<String>,
    ) -> Self {
        let time_queries = Arc::new(TimeQueryService::new(clock, zones, host, environment));

        Self { time_queries }
    }
}
