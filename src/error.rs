use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PureUrlError>;

/// All the ways a redirect request can fail. Every variant is terminal;
/// nothing here is retried.
#[derive(Debug, Error)]
pub enum PureUrlError {
    #[error("empty request path")]
    MissingPath,

    #[error("no such route")]
    UnknownRoute,

    #[error("no link token after the b23 route")]
    MissingToken,

    #[error("upstream response carries no Location header")]
    MissingLocation,

    #[error("upstream Location is not an absolute URL")]
    InvalidLocation,

    #[error("redirect target host is not allow-listed")]
    ForbiddenHost,

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for PureUrlError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingPath | Self::MissingToken => StatusCode::BAD_REQUEST,
            Self::UnknownRoute => StatusCode::NOT_FOUND,
            Self::MissingLocation | Self::InvalidLocation | Self::ForbiddenHost => {
                StatusCode::BAD_GATEWAY
            }
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Clients match on these literal bodies; keep them stable.
        let body = match &self {
            Self::MissingPath => "Missing path",
            Self::UnknownRoute => "Unknown route",
            Self::MissingToken => "Missing b23 path",
            Self::MissingLocation => "Upstream missing Location",
            Self::InvalidLocation => "Invalid Location URL",
            Self::ForbiddenHost => "Forbidden redirect host",
            Self::Upstream(_) => "Upstream request failed",
        };

        (status, body).into_response()
    }
}
