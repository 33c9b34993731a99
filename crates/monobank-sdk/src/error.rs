//! Error taxonomy for the SDK.
//!
//! Every failure mode a caller can branch on is a distinct variant carrying
//! structure (status, body, cause) rather than a message to parse.
//! Validation errors are raised before any network call.

use thiserror::Error;

/// Cause type for transport-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, MonobankError>;

/// SDK error types.
#[derive(Debug, Error)]
pub enum MonobankError {
    /// Missing or empty token at client construction.
    #[error("The API token is required and cannot be the empty string")]
    InvalidCredential,

    /// Missing or empty required caller-supplied parameter.
    #[error("The {name} parameter is required and cannot be the empty string")]
    InvalidArgument {
        /// Wire name of the offending parameter.
        name: &'static str,
    },

    /// Statement window longer than the API accepts.
    #[error("The statement period cannot be longer than 31 days and 1 hour, requested {requested} seconds")]
    InvalidPeriod {
        /// Requested window length in seconds.
        requested: i64,
    },

    /// Statement call issued sooner than 60 seconds after the previous one;
    /// rejected client-side before dispatch.
    #[error("The statement endpoint cannot be called more often than every 60 seconds, retry in {retry_in} seconds")]
    RateLimited {
        /// Seconds until the next call is admitted.
        retry_in: u64,
    },

    /// The remote rejected the token (HTTP 403).
    #[error("The provided token is not recognized by the API")]
    InvalidToken,

    /// The remote rejected the payload or referenced resource (HTTP 400/404
    /// on merchant endpoints).
    #[error("The API rejected the request (HTTP {status}): {message}")]
    InvalidRequest {
        /// HTTP status code returned.
        status: u16,
        /// Machine-readable error code from the error payload, when present.
        err_code: Option<String>,
        /// Error text from the payload, or the raw body when it did not
        /// parse.
        message: String,
    },

    /// Any other non-success status; carries the raw body for diagnostics.
    #[error("Unexpected response from the API (HTTP {status})")]
    UnexpectedResponse {
        /// HTTP status code returned.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Network, DNS, TLS or timeout failure before a response was obtained.
    #[error("The request failed before a response was obtained: {source}")]
    TransportFailure {
        /// Underlying transport cause.
        #[source]
        source: BoxError,
    },

    /// Request body serialization or response body decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
