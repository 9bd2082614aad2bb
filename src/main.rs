//! Demo Payment Service
//!
//! An HTTP payment service that simulates database connection pool
//! contention, built with Tokio and Axum. The configured pool size drives
//! artificial request latency, which makes the service a convenient target
//! for observability and incident-response demos.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request      ┌──────────────────────────────────────────────┐
//!     ────────────────────┼─▶ http/server ──▶ payments/processor          │
//!                         │       │               │         │             │
//!                         │       ▼               ▼         ▼             │
//!                         │   config/store   payments/   observability/   │
//!     Client Response     │   (snapshot)     latency     tracing (OTLP)   │
//!     ◀───────────────────┼──────────────────────────────────────────────┘
//!
//!     Cross-cutting: config watcher (hot reload), metrics, logging,
//!     lifecycle (graceful shutdown)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use payment_service::config::store::ConfigStore;
use payment_service::config::watcher::ConfigWatcher;
use payment_service::http::HttpServer;
use payment_service::lifecycle::Shutdown;
use payment_service::observability;

#[derive(Parser)]
#[command(name = "payment-service")]
#[command(about = "Demo payment service with simulated connection pool latency", long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config/payment-service.toml")]
    config: PathBuf,

    /// Override the bind address from the config file.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    observability::logging::init();

    let store = Arc::new(ConfigStore::from_path(Some(args.config.clone())));
    let config = store.current();

    tracing::info!(
        config_path = %args.config.display(),
        pool_size = config.database.connection_pool_size,
        timeout_ms = config.service.timeout_ms,
        "payment-service v0.1.0 starting"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Install the OTLP trace exporter. Falls back to a no-op emitter when
    // the exporter cannot be constructed, so tracing never blocks startup.
    let tracer = observability::tracing::init_tracer();

    // Watch the config file for edits; /reload stays available regardless.
    let _watcher = match ConfigWatcher::new(&args.config, store.clone()).run() {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(error = %e, "Config watcher unavailable, hot reload disabled");
            None
        }
    };

    let bind_address = args
        .bind
        .unwrap_or_else(|| config.listener.bind_address.clone());
    let listener = TcpListener::bind(&bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let shutdown_trigger = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown_trigger.trigger();
        }
    });

    let server = HttpServer::new(store, tracer);
    server.run(listener, shutdown.subscribe()).await?;

    observability::tracing::shutdown_tracer();
    tracing::info!("Shutdown complete");
    Ok(())
}
