// src/application/ports/host.rs
pub trait HostIdentity: Send + Sync {
    fn hostname(&self) -> String;
}
