//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use tracker_hub_backend::BackendError;

/// Core layer error type
///
/// Every variant is recoverable: callers show a notice and keep the view they
/// already rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No usable response: transport failure, timeout or undecodable body
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with a non-success status
    #[error("Rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// A required field was missing before any network call
    #[error("Invalid input: {0}")]
    InvalidLocalInput(String),

    /// A query needs a stored active connection and there is none
    #[error("No active connection")]
    NoActiveConnection,

    /// Refused because the same kind of request is still in flight
    #[error("Request already in progress: {0}")]
    Busy(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, backend refusal, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Rejected { .. }
            | Self::InvalidLocalInput(_)
            | Self::NoActiveConnection
            | Self::Busy(_) => true,
            Self::Unavailable(_) => false,
        }
    }

    /// Whether the error was raised locally, before any request went out.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidLocalInput(_) | Self::NoActiveConnection | Self::Busy(_)
        )
    }
}

impl From<BackendError> for CoreError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Rejected {
                status, message, ..
            } => Self::Rejected { status, message },
            BackendError::InvalidConfig { detail } => Self::InvalidLocalInput(detail),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Logs a failed operation at the level its error class calls for.
pub(crate) fn log_failure(operation: &str, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
}
