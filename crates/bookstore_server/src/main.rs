//! Bookstore HTTP server entry point.
//!
//! # Responsibility
//! - Load configuration, initialize logging and open the connection pool.
//! - Serve the REST API until interrupted.

use bookstore_api::{serve, AppState, ServerConfig};
use bookstore_core::{init_logging, ConnectionPool};
use log::{error, info};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=server_exit module=server status=error error={}", message);
            eprintln!("bookstore: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|err| err.to_string())?;
    init_logging(&config.log_level, config.log_target.clone())?;

    let db_path = config.db_path.clone();
    let pool_size = config.pool_size;
    let pool = tokio::task::spawn_blocking(move || ConnectionPool::open(db_path, pool_size))
        .await
        .map_err(|err| format!("database bootstrap task failed: {err}"))?
        .map_err(|err| format!("failed to open `{}`: {err}", config.db_path.display()))?;

    info!(
        "event=server_start module=server status=ok version={} bind_addr={} db_path={} pool_size={}",
        bookstore_core::core_version(),
        config.bind_addr,
        config.db_path.display(),
        config.pool_size
    );

    serve(AppState::new(pool), config.bind_addr)
        .await
        .map_err(|err| format!("server failed: {err}"))
}
