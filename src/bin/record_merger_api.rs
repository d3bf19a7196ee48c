//! HTTP record store backed by the record-merger row handling.
//!
//! ```bash
//! record-merger-api --listen 0.0.0.0:5000
//! ```

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use record_merger::api::{build_router, AppState};
use record_merger::store::MemoryRecordStore;

/// HTTP record store
#[derive(Parser, Debug)]
#[command(name = "record-merger-api", version)]
struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:5000", env = "RECORD_MERGER_LISTEN")]
    listen: SocketAddr,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value = "info", env = "RECORD_MERGER_LOG_LEVEL")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let level = LevelFilter::from_str(&args.log_level)
        .map_err(|e| anyhow!("--log-level {}: {}", args.log_level, e))?;
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let state = Arc::new(AppState::new(Arc::new(MemoryRecordStore::new())));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("bind {}", args.listen))?;
    log::info!("Listening on {}", args.listen);
    axum::serve(listener, router).await?;
    Ok(())
}
