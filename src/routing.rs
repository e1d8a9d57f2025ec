//! Request path normalization and route dispatch.
//!
//! Paths are normalized before matching (outer slashes stripped, empty
//! segments dropped), so `//b23//abc/` dispatches the same as `/b23/abc`.

use crate::config::RoutingMode;
use crate::error::PureUrlError;

/// A dispatched route with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Resolve a b23.tv short link; the payload is the link token.
    B23 { token: String },
}

/// Normalize a request path and dispatch it to a route.
///
/// In [`RoutingMode::Routed`] the first segment must be `b23` and the
/// remaining segments form the link token. In [`RoutingMode::Bare`] the
/// whole path is the token.
///
/// # Errors
/// - [`PureUrlError::MissingPath`] when no segments remain after normalization
/// - [`PureUrlError::UnknownRoute`] for any first segment other than `b23`
/// - [`PureUrlError::MissingToken`] for `b23` with nothing after it
pub fn dispatch(path: &str, mode: &RoutingMode) -> Result<Route, PureUrlError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        return Err(PureUrlError::MissingPath);
    }

    match mode {
        RoutingMode::Bare => Ok(Route::B23 {
            token: segments.join("/"),
        }),
        RoutingMode::Routed => match segments[0] {
            "b23" => {
                let token = segments[1..].join("/");
                if token.is_empty() {
                    return Err(PureUrlError::MissingToken);
                }
                Ok(Route::B23 { token })
            }
            _ => Err(PureUrlError::UnknownRoute),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Routed mode ---

    #[test]
    fn empty_path_is_missing() {
        assert!(matches!(
            dispatch("/", &RoutingMode::Routed),
            Err(PureUrlError::MissingPath)
        ));
        assert!(matches!(
            dispatch("", &RoutingMode::Routed),
            Err(PureUrlError::MissingPath)
        ));
        assert!(matches!(
            dispatch("///", &RoutingMode::Routed),
            Err(PureUrlError::MissingPath)
        ));
    }

    #[test]
    fn unknown_first_segment_rejected() {
        assert!(matches!(
            dispatch("/unknown/path", &RoutingMode::Routed),
            Err(PureUrlError::UnknownRoute)
        ));
        assert!(matches!(
            dispatch("/B23/abc", &RoutingMode::Routed),
            Err(PureUrlError::UnknownRoute)
        ));
    }

    #[test]
    fn b23_without_token_rejected() {
        assert!(matches!(
            dispatch("/b23", &RoutingMode::Routed),
            Err(PureUrlError::MissingToken)
        ));
        assert!(matches!(
            dispatch("/b23/", &RoutingMode::Routed),
            Err(PureUrlError::MissingToken)
        ));
        assert!(matches!(
            dispatch("/b23//", &RoutingMode::Routed),
            Err(PureUrlError::MissingToken)
        ));
    }

    #[test]
    fn b23_token_extracted() {
        assert_eq!(
            dispatch("/b23/abc", &RoutingMode::Routed).unwrap(),
            Route::B23 {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn multi_segment_token_rejoined() {
        assert_eq!(
            dispatch("/b23/a/b/c", &RoutingMode::Routed).unwrap(),
            Route::B23 {
                token: "a/b/c".to_string()
            }
        );
    }

    #[test]
    fn doubled_and_trailing_slashes_dropped() {
        assert_eq!(
            dispatch("//b23//abc/", &RoutingMode::Routed).unwrap(),
            Route::B23 {
                token: "abc".to_string()
            }
        );
    }

    // --- Bare mode ---

    #[test]
    fn bare_mode_uses_whole_path_as_token() {
        assert_eq!(
            dispatch("/abc", &RoutingMode::Bare).unwrap(),
            Route::B23 {
                token: "abc".to_string()
            }
        );
        assert_eq!(
            dispatch("/a/b", &RoutingMode::Bare).unwrap(),
            Route::B23 {
                token: "a/b".to_string()
            }
        );
    }

    #[test]
    fn bare_mode_still_requires_a_path() {
        assert!(matches!(
            dispatch("/", &RoutingMode::Bare),
            Err(PureUrlError::MissingPath)
        ));
    }
}
