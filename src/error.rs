//! Error types for ukcovid-dl
//!
//! Every failure mode in the crate maps to a variant of [`Error`]. Remote
//! failures (an error-range HTTP status) carry the response body as
//! diagnostic text; transport failures (timeouts, connection errors) wrap
//! the underlying [`reqwest::Error`]. There is no retry and no partial
//! result: any error aborts the whole fetch.

use thiserror::Error;

/// Result type alias for ukcovid-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ukcovid-dl
#[derive(Debug, Error)]
pub enum Error {
    /// The API returned an error-range status code (>= 400)
    #[error("request failed (HTTP {status}): {body}")]
    RequestFailed {
        /// HTTP status code of the failed response
        status: u16,
        /// Raw response body, surfaced as the failure detail
        body: String,
    },

    /// Network-level failure (connection error, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "endpoint")
        key: Option<String>,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
