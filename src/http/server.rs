//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with both routes
//! - Wire up middleware (request ID, tracing, inbound timeout)
//! - Serve on a bound listener with graceful Ctrl+C shutdown
//!
//! Handlers receive their collaborators through [`AppState`]: the calendar
//! lookup capability and the clock are trait objects so tests can swap in
//! mocks without network access or real time.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::calendar::CalendarLookup;
use crate::clock::Clock;
use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub calendar: Arc<dyn CalendarLookup>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(calendar: Arc<dyn CalendarLookup>, clock: Arc<dyn Clock>) -> Self {
        Self { calendar, clock }
    }
}

/// HTTP server for the Ramadan query API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server with the given state and inbound request timeout.
    pub fn new(state: AppState, request_timeout: Duration) -> Self {
        Self {
            router: build_router(state, request_timeout),
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::usage))
        .route("/{country}", get(handlers::ramadan_lookup))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
