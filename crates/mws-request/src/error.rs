//! Error types for request preparation.

use mws_auth::AuthError;
use mws_core::MwsError;

/// Errors that can occur while preparing a signed request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Flattening, cleaning, or signing failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Configuration is incomplete or invalid.
    #[error(transparent)]
    Config(#[from] MwsError),

    /// The action has no `...ByNextToken` counterpart in this API section.
    #[error("{0} action not listed in this API's next token operations")]
    UnsupportedNextToken(String),

    /// Generic requests need a service-specific URI.
    #[error("cannot send generic request to URI {0:?}")]
    InvalidUri(String),

    /// Request parameters have the wrong shape.
    #[error("invalid request parameters: {0}")]
    InvalidParameters(String),

    /// The HTTP request could not be assembled.
    #[error(transparent)]
    Http(#[from] http::Error),
}

/// Convenience result type for request preparation.
pub type RequestResult<T> = Result<T, RequestError>;
