//! # mermaid-desk
//!
//! Host process for the Mermaid desk editor. Serves the server-rendered
//! Leptos shell, the hydration bundle under `/pkg`, and `/healthz`. Diagrams
//! live in the browser's local storage; the host keeps no state.

#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

use crate::config::HostConfig;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!(error = %message, "mermaid-desk stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = HostConfig::from_env().map_err(|e| e.to_string())?;
    let app = routes::app(&config)?;

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    tracing::info!(%addr, "mermaid-desk listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
