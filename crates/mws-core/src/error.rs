//! Error types for the MWS core.

/// Core error type for configuration and marketplace lookup.
#[derive(Debug, thiserror::Error)]
pub enum MwsError {
    /// Unknown marketplace region code.
    #[error("incorrect region supplied: {region}. Must be one of the following: {valid}")]
    InvalidRegion {
        /// The rejected region code.
        region: String,
        /// Comma-separated list of accepted codes.
        valid: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for MWS core operations.
pub type MwsResult<T> = Result<T, MwsError>;
