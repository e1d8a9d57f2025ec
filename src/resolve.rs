//! Upstream short-link resolution.

use crate::error::{PureUrlError, Result};
use reqwest::{Client, header};
use tracing::{info, warn};
use url::Url;

/// Resolve a link token against the upstream provider.
///
/// Issues a single GET for `{upstream}/{token}` and parses the raw
/// `Location` header of the response. The shared client never follows
/// redirects, so the upstream's own 3xx is what we see here. The token is
/// passed through as-is; the router only guarantees it is non-empty.
///
/// # Errors
/// - [`PureUrlError::Upstream`] when the request itself fails
/// - [`PureUrlError::MissingLocation`] when the response has no `Location`
/// - [`PureUrlError::InvalidLocation`] when `Location` is not an absolute URL
pub async fn resolve_token(client: &Client, upstream_url: &str, token: &str) -> Result<Url> {
    let target = format!("{}/{}", upstream_url.trim_end_matches('/'), token);

    info!("Resolving short link via {}", target);

    let response = client.get(&target).send().await.map_err(|e| {
        warn!("Upstream request to {} failed: {}", target, e);
        PureUrlError::from(e)
    })?;

    let location = response
        .headers()
        .get(header::LOCATION)
        .ok_or(PureUrlError::MissingLocation)?;

    location
        .to_str()
        .ok()
        .and_then(|loc| Url::parse(loc).ok())
        .ok_or(PureUrlError::InvalidLocation)
}
