//! Claim Coverage Analyzer - API Server Binary
//!
//! This binary starts the HTTP API server for the coverage evaluator.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claim-analyzer-api
//!
//! # Run with environment variables
//! APP_PORT=9000 APP_RED_FLAG_THRESHOLD=4 cargo run --bin claim-analyzer-api
//! ```
//!
//! # Environment Variables
//!
//! * `APP_HOST` - Server host (default: 0.0.0.0)
//! * `APP_PORT` - Server port (default: 8080)
//! * `APP_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `APP_RED_FLAG_THRESHOLD` - Red flag count that denies coverage (default: 3)

use anyhow::Context;
use interface_api::{create_router, config::ApiConfig};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, builds the evaluator,
/// and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The evaluator configuration is invalid
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        red_flag_threshold = config.red_flag_threshold,
        "Starting Claim Coverage Analyzer API Server"
    );

    let app = create_router(config.clone()).context("Failed to build evaluator")?;

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("Invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
