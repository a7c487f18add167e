//! Typed failures of a tracking run.

use std::path::PathBuf;

use thiserror::Error;

use crate::http::NonRetryableError;

/// Broad classification used for diagnostics and exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Decode => write!(f, "decode error"),
            ErrorKind::Io => write!(f, "I/O error"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackError {
    /// The request could not be completed, or the server answered 5xx.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a client error that will not go away on retry.
    #[error("request to {url} was rejected: {reason}")]
    Rejected {
        url: String,
        reason: NonRetryableError,
    },

    /// The body was not JSON, or not the shape of a releases listing.
    #[error("unexpected response body from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write CSV rows to {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl TrackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackError::Network { .. } | TrackError::Rejected { .. } => ErrorKind::Network,
            TrackError::Decode { .. } => ErrorKind::Decode,
            TrackError::Io { .. } | TrackError::Csv { .. } => ErrorKind::Io,
        }
    }

    /// Only transport failures and server-side errors are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TrackError::Network { .. })
    }
}
