//! Game-jam platform backend.
//!
//! A single-binary HTTP service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │                 BACKEND                     │
//!                  │                                             │
//!  Client Request  │  ┌─────────┐    ┌──────────────┐           │
//!  ────────────────┼─▶│  http   │───▶│ route table  │           │
//!                  │  │ server  │    │ (immutable)  │           │
//!                  │  └─────────┘    └──────┬───────┘           │
//!                  │                        │                    │
//!                  │        ┌───────────────┼───────────────┐   │
//!                  │        ▼               ▼               ▼   │
//!                  │  ┌──────────┐   ┌────────────┐   ┌───────┐│
//!                  │  │ /admin/  │   │   /api/    │   │/api/v1││
//!                  │  │  mount   │   │ 308 → v1/  │   │ mount ││
//!                  │  └──────────┘   └────────────┘   └───┬───┘│
//!                  │                                      │    │
//!                  │                                      ▼    │
//!                  │                               ┌──────────┐│
//!                  │                               │ in-mem   ││
//!                  │                               │  store   ││
//!                  │                               └──────────┘│
//!                  │  ┌──────────────────────────────────────┐ │
//!                  │  │   config · observability · lifecycle │ │
//!                  │  └──────────────────────────────────────┘ │
//!                  └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use gamejam_backend::config::{load_config, AppConfig};
use gamejam_backend::lifecycle::Shutdown;
use gamejam_backend::observability::logging::init_logging;
use gamejam_backend::{HttpServer, Store};

#[derive(Debug, Parser)]
#[command(name = "gamejam-backend", version, about = "Game-jam platform backend")]
struct Args {
    /// Path to the TOML config file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    init_logging(&config.observability.log_level);

    tracing::info!("gamejam-backend v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        request_timeout_secs = config.server.request_timeout_secs,
        admin_enabled = config.admin.enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => gamejam_backend::observability::metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let store = Arc::new(Store::new());
    let shutdown = Shutdown::new();

    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
