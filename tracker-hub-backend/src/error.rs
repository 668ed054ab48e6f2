use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for every backend call.
///
/// Each variant names the endpoint that produced it. Variants are serializable
/// for structured error reporting.
///
/// # Transport vs. rejection
///
/// [`NetworkError`](Self::NetworkError) and [`Timeout`](Self::Timeout) mean no
/// HTTP response was obtained. [`Rejected`](Self::Rejected) means the backend
/// answered with a non-success status and a reason. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BackendError {
    /// A network-level error occurred (connection refused, DNS failure, reset, ...).
    #[error("[{endpoint}] Network error: {detail}")]
    NetworkError {
        /// Endpoint path of the failed call.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The transport gave up waiting for a response.
    #[error("[{endpoint}] Request timed out: {detail}")]
    Timeout {
        /// Endpoint path of the failed call.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-success status.
    #[error("[{endpoint}] Rejected (HTTP {status}): {message}")]
    Rejected {
        /// Endpoint path of the failed call.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Reason supplied by the backend (may be empty).
        message: String,
    },

    /// A success response carried a body that could not be decoded.
    #[error("[{endpoint}] Failed to parse response: {detail}")]
    ParseError {
        /// Endpoint path of the failed call.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized.
    #[error("[{endpoint}] Failed to serialize request: {detail}")]
    SerializationError {
        /// Endpoint path of the failed call.
        endpoint: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client configuration is unusable (bad base URL, TLS init failure).
    #[error("Invalid backend configuration: {detail}")]
    InvalidConfig {
        /// What is wrong.
        detail: String,
    },
}

impl BackendError {
    /// Whether this is expected behaviour (user input rejected by the backend),
    /// used to pick the log level.
    ///
    /// `true` → `warn`, `false` → `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Whether no HTTP response was obtained at all.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// Endpoint that produced the error, when there is one.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::NetworkError { endpoint, .. }
            | Self::Timeout { endpoint, .. }
            | Self::Rejected { endpoint, .. }
            | Self::ParseError { endpoint, .. }
            | Self::SerializationError { endpoint, .. } => Some(endpoint),
            Self::InvalidConfig { .. } => None,
        }
    }
}

/// Result alias for backend calls.
pub type Result<T> = std::result::Result<T, BackendError>;
