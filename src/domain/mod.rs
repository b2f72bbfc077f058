pub mod time;

pub use time::{TimeSnapshot, UtcOffset};
