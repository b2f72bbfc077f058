// src/infrastructure/host.rs
use crate::application::ports::host::HostIdentity;

const UNKNOWN_HOST: &str = "unknown";

#[derive(Clone, Debug)]
pub struct SystemHost {
    hostname: String,
}

impl SystemHost {
    pub fn detect() -> Self {
        let hostname = match hostname::get() {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read hostname");
                UNKNOWN_HOST.to_string()
            }
        };
        Self { hostname }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::detect()
    }
}

impl HostIdentity for SystemHost {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }
}
