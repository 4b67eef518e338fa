//! Error types for external IP observation.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Why a single echo endpoint failed to produce an address.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The HTTP request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The service responded with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(http::StatusCode),

    /// The response body was not a parseable IP address.
    #[error("Response body is not an IP address")]
    NotAnIp,
}

/// Error type for the probe as a whole.
///
/// Non-fatal at the run layer: the summary is returned without an
/// external IP and a warning is emitted.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Every configured endpoint failed.
    #[error("External IP unavailable: all {attempts} endpoint(s) failed")]
    AllEndpointsFailed {
        /// How many endpoints were tried.
        attempts: usize,
    },

    /// No endpoints were configured.
    #[error("External IP unavailable: no endpoints configured")]
    NoEndpoints,
}
