// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod host;
pub mod time;

pub use host::{FIXED_HOSTNAME, FixedHost};
pub use time::{FixedClock, FixedZone, fixed_now};
