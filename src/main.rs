//! Ramadan Query Service
//!
//! A thin HTTP wrapper over the Aladhan Gregorian-to-Hijri calendar API,
//! built with Tokio and Axum. Two routes: a static usage document at `/`
//! and the per-country Ramadan lookup at `/{country}`.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ramadan_query::calendar::AladhanClient;
use ramadan_query::clock::SystemClock;
use ramadan_query::config::ServiceConfig;
use ramadan_query::http::{AppState, HttpServer};

/// Command-line options. Everything else comes from the environment.
#[derive(Debug, Parser)]
#[command(name = "ramadan-query", about = "Is-it-Ramadan HTTP API")]
struct Cli {
    /// Listening port (overrides the PORT environment variable).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ramadan_query=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("ramadan-query v0.1.0 starting");

    let cli = Cli::parse();
    let mut config = ServiceConfig::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing::info!(
        port = config.port,
        upstream = %config.upstream_base_url,
        request_timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let calendar = Arc::new(AladhanClient::new(config.upstream_url()?));
    let state = AppState::new(calendar, Arc::new(SystemClock));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        url = %format!("http://localhost:{}", config.port),
        "Server running"
    );

    let server = HttpServer::new(state, Duration::from_secs(config.request_timeout_secs));
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
