//! Client error types.

use ims_config::ConfigError;
use ims_core::InvalidArgument;
use thiserror::Error;

/// Errors that can occur while issuing an IMS operations request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The parameter bag failed local validation; no request was sent.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The session could not be built from the resolved connection.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP transport error (connection refused, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The response body is not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request succeeded at HTTP level but IMS reported a failure.
    #[error("IMS reported a failure ({})", .codes.join(", "))]
    ApplicationFailure {
        /// `origin=code` pairs that failed.
        codes: Vec<String>,
        /// Messages returned alongside the failure.
        messages: Vec<String>,
    },
}

/// Coarse class of a [`ClientError`], used to pick a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    RemoteRequest,
    ApplicationFailure,
}

impl ClientError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::Config(_) => ErrorKind::InvalidArgument,
            Self::Http(_) | Self::Api { .. } | Self::Parse(_) => ErrorKind::RemoteRequest,
            Self::ApplicationFailure { .. } => ErrorKind::ApplicationFailure,
        }
    }
}
