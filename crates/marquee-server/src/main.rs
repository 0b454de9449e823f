//! Marquee server binary
//!
//! Reads `MARQUEE_*` environment variables, opens the SQLite store and serves
//! the directory over HTTP until interrupted.

use anyhow::{Context, Result};
use marquee_core::SystemClock;
use marquee_server::config::ServerConfig;
use marquee_server::logging;
use marquee_server::storage::Database;
use marquee_server::{build_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let log_guard = match logging::init(config.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("[FATAL] Failed to initialize logging: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Starting Marquee v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Data directory: {}", config.data_dir.display());
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("Failed to create data directory {}", config.data_dir.display()))?;

    info!("Initializing SQLite database...");
    let db = Database::new(&config.database_path, config.max_connections)
        .await
        .context("Failed to initialize database")?;
    info!("SQLite database initialized at: {}", config.database_path);

    let state = AppState::new(Arc::new(db), Arc::new(SystemClock));
    let app = build_router(state, config.request_timeout);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
