//! Error types for action-tools-core

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use std::fmt;

/// Result type alias for action-tools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for action-tools operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Non-2xx response from the API
    #[error(transparent)]
    Status(Box<ClientStatusError>),

    /// Target string is neither an action nor a workflow reference
    #[error("target {0} does not appear to be an action or workflow")]
    InvalidTarget(String),

    /// Classified resource does not exist upstream
    #[error("Could not find {0}")]
    NotFound(String),

    /// Malformed next-page link
    #[error("Pagination error: {0}")]
    Pagination(String),

    /// Response body did not have the expected shape
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Action metadata failed validation
    #[error("Invalid action metadata: {0}")]
    InvalidMetadata(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<ClientStatusError> for Error {
    fn from(err: ClientStatusError) -> Self {
        Error::Status(Box::new(err))
    }
}

/// The request that produced an error response
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    /// HTTP method
    pub method: Method,
    /// Full request URL, query string included
    pub url: Url,
}

/// The error response as received
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    /// Response status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body, lossily decoded
    pub body: String,
}

/// An HTTP response with status >= 400.
///
/// Callers branch on [`ClientStatusError::status_code`] rather than on the
/// message text.
#[derive(Debug, Clone)]
pub struct ClientStatusError {
    /// Numeric status code
    pub status_code: u16,
    /// Request that was sent
    pub request: RequestSnapshot,
    /// Response that came back
    pub response: ResponseSnapshot,
}

impl fmt::Display for ClientStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = self.response.status.canonical_reason().unwrap_or("Unknown");
        let side = if self.status_code >= 500 {
            "Server"
        } else {
            "Client"
        };
        write!(
            f,
            "{side} error '{} {}' for url '{}'",
            self.status_code, reason, self.request.url
        )
    }
}

impl std::error::Error for ClientStatusError {}

/// Fieldless error category for cheap pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorKind {
    /// Transport error
    Http,
    /// Non-2xx response
    Status,
    /// Unrecognised target string
    InvalidTarget,
    /// Resource absent
    NotFound,
    /// Bad next-page link
    Pagination,
    /// Unexpected response shape
    Json,
    /// Configuration error
    Config,
    /// Action metadata error
    InvalidMetadata,
    /// I/O error
    Io,
}

impl Error {
    /// Get the error kind
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) => ErrorKind::Http,
            Error::Status(_) => ErrorKind::Status,
            Error::InvalidTarget(_) => ErrorKind::InvalidTarget,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Pagination(_) => ErrorKind::Pagination,
            Error::Json(_) => ErrorKind::Json,
            Error::Config(_) => ErrorKind::Config,
            Error::InvalidMetadata(_) => ErrorKind::InvalidMetadata,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Numeric HTTP status, if this is a status error
    #[inline]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status(err) => Some(err.status_code),
            _ => None,
        }
    }
}
