// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use std::{env, path::PathBuf};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = env::var("OPENAPI_SNAPSHOT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("openapi.json"));
    server_time::presentation::http::openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
