// src/config.rs
use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    host: IpAddr,
    port: u16,
    environment: String,
    trust_proxy: bool,
    openapi_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_environment() -> String {
    "production".into()
}

fn default_openapi_path() -> PathBuf {
    PathBuf::from("openapi.json")
}

/// Parse a boolean flag the way operators usually spell them in env files.
fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got `{other}`"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Every option has a
    /// default; malformed values are rejected instead of silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`,
    /// which keeps tests away from the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "PORT must be an integer in 1..=65535, got `{raw}`"
                    ))
                })?,
            None => default_port(),
        };

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid(format!("HOST must be an IP address, got `{raw}`")))?,
            None => default_host(),
        };

        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let environment = non_blank("APP_ENV")
            .or_else(|| non_blank("NODE_ENV"))
            .unwrap_or_else(default_environment);

        let trust_proxy = lookup("TRUST_PROXY")
            .map(|v| parse_flag("TRUST_PROXY", &v))
            .transpose()?
            .unwrap_or(false);

        let openapi_path = lookup("OPENAPI_SPEC_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_openapi_path);

        Ok(Self {
            host,
            port,
            environment,
            trust_proxy,
            openapi_path,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Deployment label reported in time payloads.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Whether `X-Forwarded-For` / `X-Real-IP` are honoured.
    pub fn trust_proxy(&self) -> bool {
        self.trust_proxy
    }

    pub fn openapi_path(&self) -> &Path {
        &self.openapi_path
    }

    /// JSON responses are pretty-printed in development.
    pub fn pretty_json(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
            || self.environment.eq_ignore_ascii_case("dev")
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_trust_proxy(mut self, trust_proxy: bool) -> Self {
        self.trust_proxy = trust_proxy;
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            trust_proxy: false,
            openapi_path: default_openapi_path(),
        }
    }
}
