use crate::{
    error::Result,
    resolve, rewrite,
    routing::{self, Route},
    server::state::AppState,
};
use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::info;

/// Resolve a short link and answer with a sanitized redirect.
///
/// Mounted as the router fallback so every method and path lands here;
/// dispatch runs on the normalized path rather than on axum route patterns,
/// which would never match doubled or trailing slashes.
pub async fn handle(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let Route::B23 { token } = routing::dispatch(uri.path(), &state.config.routing_mode)?;

    info!("Resolving b23 token: {}", token);

    let target =
        resolve::resolve_token(&state.http_client, &state.config.upstream_url, &token).await?;
    let rewritten = rewrite::sanitize_redirect(target)?;

    info!("Redirecting to {}", rewritten);

    // 302 with an empty body; no-store keeps intermediaries from pinning
    // a token to a stale target.
    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, rewritten.to_string()),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
    )
        .into_response())
}
