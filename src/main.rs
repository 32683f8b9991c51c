//! Academic Record Lookup Service
//!
//! A small HTTP service built with Tokio and Axum that answers CPF
//! lookups against a published spreadsheet export.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │               CONSULTA SERVICE              │
//!                      │                                            │
//!     POST /consulta   │  ┌─────────┐    ┌─────────┐    ┌────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│ lookup  │◀───│ source │◀─┼──── Published
//!                      │  │ server  │    │ matcher │    │ fetch  │  │     sheet (CSV)
//!                      │  └─────────┘    └─────────┘    └────────┘  │
//!                      │                                            │
//!                      │  ┌──────────────────────────────────────┐  │
//!                      │  │        Cross-Cutting Concerns         │  │
//!                      │  │  config · tracing · lifecycle         │  │
//!                      │  └──────────────────────────────────────┘  │
//!                      └────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use consulta_academica::config::load_config;
use consulta_academica::http::HttpServer;
use consulta_academica::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration: the first CLI argument is the config path
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: consulta <config.toml>");
        std::process::exit(2);
    };
    let config = load_config(std::path::Path::new(&path))?;

    // Initialize tracing subscriber; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.observability.log_level)
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "consulta starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        source_kind = ?config.source.kind,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
