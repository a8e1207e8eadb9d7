//! Read-only status API.
//!
//! # Routes
//! - `GET /status`: version and number of tracked domains
//! - `GET /availability`: cumulative counters and percentage per domain
//! - `GET /availability/skipped`: endpoints skipped for lack of a hostname
//!
//! Handlers only read the store; the cycle runner stays the single writer.

pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use self::handlers::*;
use crate::lifecycle::Shutdown;
use crate::store::DomainStatusStore;

pub fn setup_status_router(store: Arc<DomainStatusStore>) -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/availability", get(get_availability))
        .route("/availability/skipped", get(get_skipped))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve the status API until `shutdown` fires.
pub async fn serve(
    listener: TcpListener,
    store: Arc<DomainStatusStore>,
    shutdown: Shutdown,
) -> Result<(), std::io::Error> {
    tracing::info!(address = %listener.local_addr()?, "Status API listening");

    axum::serve(listener, setup_status_router(store))
        .with_graceful_shutdown(shutdown.wait())
        .await?;

    tracing::info!("Status API stopped");
    Ok(())
}
