// tests/support/mocks/host.rs
use server_time::application::ports::host::HostIdentity;

pub const FIXED_HOSTNAME: &str = "test-host";

#[derive(Clone, Copy)]
pub struct FixedHost;

impl HostIdentity for FixedHost {
    fn hostname(&self) -> String {
        FIXED_HOSTNAME.to_string()
    }
}
