// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::AppConfig;
use crate::presentation::http::openapi::ApiDocument;
use std::{sync::Arc, time::Instant};

/// Process-lifetime context shared by every handler. Built once at startup
/// and never mutated afterwards.
#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub config: Arc<AppConfig>,
    pub api_document: ApiDocument,
    pub started_at: Instant,
}

impl HttpState {
    pub fn new(
        services: Arc<ApplicationServices>,
        config: Arc<AppConfig>,
        api_document: ApiDocument,
    ) -> Self {
        Self {
            services,
            config,
            api_document,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
