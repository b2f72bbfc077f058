pub mod time;

pub use time::{ServerInfoDto, TimeDto};
