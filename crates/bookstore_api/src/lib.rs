//! HTTP boundary for the bookstore service.
//!
//! # Responsibility
//! - Map REST routes onto entity services.
//! - Parse ids and bodies, validate short forms before any storage call.
//! - Translate domain errors into status codes and `{"error": ..}` bodies.
//!
//! # Invariants
//! - Handlers never block the async runtime; storage calls go through
//!   `spawn_blocking`.
//! - Handlers never panic on client input.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

use log::info;
use std::net::SocketAddr;

/// Serves `state` on `addr` until Ctrl-C.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "event=server_listen module=api status=ok addr={}",
        listener.local_addr()?
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("event=server_stop module=api status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!(
            "event=server_signal module=api status=error error={}",
            err
        );
        std::future::pending::<()>().await;
    }
}
