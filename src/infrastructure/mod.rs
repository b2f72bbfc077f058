pub mod host;
pub mod time;
