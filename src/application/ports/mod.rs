// src/application/ports/mod.rs
pub mod host;
pub mod time;
