//! Pricing Engine Binary
//!
//! Starts the GBCE pricing service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pricing-engine
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG_PATH`: Path to the YAML config file (default: config.yaml)
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `BIND_ADDRESS`: Bind address (default: 0.0.0.0)
//! - `VWAP_WINDOW_MINUTES`: Trailing window for the volume-weighted price (default: 15)
//! - `REFERENCE_DATA_PATH`: Instrument reference data JSON (default: data/instruments.json)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use pricing_engine::application::ports::SystemClock;
use pricing_engine::application::pricing::PricingEngine;
use pricing_engine::config::{Config, load_config};
use pricing_engine::infrastructure::http::{AppState, create_router};
use pricing_engine::infrastructure::persistence::{InstrumentCatalog, TradeLedger};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting GBCE pricing engine");

    let config = load_config(std::env::var("CONFIG_PATH").ok().as_deref())?;
    log_config(&config);

    // A broken or empty reference data file is a startup fault.
    let catalog = InstrumentCatalog::load(Path::new(&config.reference_data.path))
        .context("instrument reference data is required at startup")?;
    tracing::info!(
        instruments = catalog.len(),
        path = %config.reference_data.path,
        "Instrument catalog loaded"
    );

    let ledger = Arc::new(TradeLedger::new());
    let engine = Arc::new(PricingEngine::new(
        Arc::new(catalog),
        ledger,
        Arc::new(SystemClock),
        config.pricing.vwap_window_minutes,
    ));

    let state = AppState {
        engine,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(state);

    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.http_port).parse()?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/trades");
    tracing::info!("  GET  /api/v1/stocks/{{symbol}}/dividend-yield");
    tracing::info!("  GET  /api/v1/stocks/{{symbol}}/pe-ratio");
    tracing::info!("  GET  /api/v1/stocks/{{symbol}}/volume-weighted-price");
    tracing::info!("  GET  /api/v1/index");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Pricing engine stopped");
    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "pricing_engine=info"
                    .parse()
                    .expect("static directive 'pricing_engine=info' is valid"),
            ),
        )
        .init();
}

/// Log the loaded configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        bind_address = %config.server.bind_address,
        vwap_window_minutes = config.pricing.vwap_window_minutes,
        reference_data_path = %config.reference_data.path,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed: a process that cannot
/// respond to termination signals is worse than one that fails fast at
/// startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
