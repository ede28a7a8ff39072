//! HTTP API for the score store, plus the static UI assets
//!
//! - GET /health - Health check
//! - GET /api/scores - All game scores
//! - POST /api/scores/:game - Record one answer
//! - POST /api/reset - Zero all scores
//! - GET /api/sounds - List sound files under the assets directory
//! - anything else - Static files from the assets directory

mod handlers;
mod routes;
mod state;

pub use handlers::{RecordScoreRequest, SoundFile};
pub use routes::create_router;
pub use state::AppState;

use crate::config::HttpConfig;
use anyhow::{Context, Result};
use tracing::info;

/// Bind and serve the router until the process stops
pub async fn serve(http: &HttpConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", http.bind, http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP server to {}", addr))?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, create_router(state))
        .await
        .context("HTTP server failed")?;

    Ok(())
}
