pub mod handlers;
pub mod state;

use crate::config::Config;
use axum::Router;
use state::AppState;
use tracing::{error, info};

/// Build the Axum router.
///
/// A single method-agnostic fallback handles everything: path normalization
/// (leading, trailing, and doubled slashes) lives in [`crate::routing`], and
/// axum's own pattern matching would bypass it.
pub fn build_router(config: Config) -> Router {
    let state = AppState::new(config);

    Router::new()
        .fallback(handlers::redirect::handle)
        .with_state(state)
}

/// Start the Axum HTTP server
pub async fn start(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("0.0.0.0:{}", config.port);

    let app = build_router(config);

    // Bind TCP listener
    let listener = match tokio::net::TcpListener::bind(addr.as_str()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("🚀 Server listening on http://{}", addr);

    // Start serving
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
