//! Error types for the mapping client

use serde_json::Value;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while driving a mapping job
///
/// Only the in-progress polling state is ever retried; each of these
/// variants is surfaced immediately and the workflow returns no partial
/// results.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request could not be performed
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The job reached a terminal non-success state
    #[error("mapping job {job_id} failed: {payload}")]
    JobFailed {
        /// Identifier of the failed job
        job_id: String,
        /// Raw status payload, kept for diagnostics
        payload: Value,
    },

    /// The job was still pending when the poll budget ran out
    #[error("mapping job {job_id} not finished after {attempts} status poll(s)")]
    PollLimitExceeded {
        /// Identifier of the abandoned job
        job_id: String,
        /// Number of polls issued before giving up
        attempts: u32,
    },

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}
