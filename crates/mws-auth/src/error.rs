//! Error types for parameter preparation and signing.
//!
//! Every variant describes malformed caller input. Nothing here is retried or
//! recovered internally; errors propagate to the caller unchanged.

/// Errors raised while cleaning, flattening, or signing request parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A non-scalar value reached the scalar cleaner.
    #[error("cannot clean parameter value of type {0}")]
    InvalidParameterType(&'static str),

    /// A scalar value was flattened without a key to name it.
    #[error("a {0} value requires a non-empty key")]
    MissingKey(&'static str),

    /// A mapping key cannot be used as a path segment.
    #[error("invalid parameter key segment: {0:?}")]
    InvalidKey(String),

    /// Two structural paths produced the same flattened key.
    #[error("duplicate parameter key: {0}")]
    DuplicateKey(String),

    /// Signing was attempted with an unusable secret key.
    #[error("signing error: {0}")]
    Signing(String),
}

/// Convenience result type for this crate.
pub type AuthResult<T> = Result<T, AuthError>;
