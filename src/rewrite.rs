//! Redirect target validation and query sanitization.
//!
//! A resolved redirect may only point at bilibili itself, and its query
//! string is reduced to the two parameters that change what the player
//! shows: `p` (part index) and `t` (timestamp). `start_progress`, a
//! millisecond offset some share links carry instead of `t`, is folded
//! into `t`. Everything else is tracking noise and gets dropped.

use crate::error::PureUrlError;
use url::Url;

/// Hostnames a resolved redirect may point at. Exact match only.
pub const ALLOWED_HOSTS: [&str; 3] = ["www.bilibili.com", "bilibili.com", "m.bilibili.com"];

/// Sanitize a resolved redirect target.
///
/// Keeps `p` and `t` verbatim, derives `t` from `start_progress` when it
/// carries sub-second precision (overriding any preserved `t`), and drops
/// every other query parameter. Applying this twice is a no-op.
///
/// # Errors
/// Returns [`PureUrlError::ForbiddenHost`] when the target's hostname is
/// missing or not one of [`ALLOWED_HOSTS`].
pub fn sanitize_redirect(mut url: Url) -> Result<Url, PureUrlError> {
    match url.host_str() {
        Some(host) if ALLOWED_HOSTS.contains(&host) => {}
        _ => return Err(PureUrlError::ForbiddenHost),
    }

    let page = first_param(&url, "p");
    let timestamp = first_param(&url, "t");
    let start_progress = first_param(&url, "start_progress");

    let mut kept: Vec<(&str, String)> = Vec::new();
    if let Some(p) = page {
        kept.push(("p", p));
    }
    match start_progress.as_deref().and_then(derive_timestamp) {
        Some(derived) => kept.push(("t", derived)),
        None => {
            if let Some(t) = timestamp {
                kept.push(("t", t));
            }
        }
    }

    url.set_query(None);
    if !kept.is_empty() {
        url.query_pairs_mut().extend_pairs(kept);
    }

    Ok(url)
}

/// First occurrence of a query parameter; empty values count as absent.
fn first_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Convert a millisecond offset (decimal string) into a seconds timestamp,
/// e.g. `"12345"` into `"12.345"`. Values of three characters or fewer
/// produce nothing; sub-second-only offsets have never yielded a `t`.
fn derive_timestamp(millis: &str) -> Option<String> {
    // split_at panics off a char boundary; non-ASCII input gets no timestamp
    if millis.len() <= 3 || !millis.is_char_boundary(millis.len() - 3) {
        return None;
    }
    let (seconds, fraction) = millis.split_at(millis.len() - 3);
    Some(format!("{seconds}.{fraction}"))
}
