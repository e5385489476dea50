//! Error types for apt_watch

use std::fmt;

/// Unified error type for upstream fetch operations
#[derive(Debug)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "Network error: {}", e),
            FetchError::Parse(e) => write!(f, "Parse error: {}", e),
            FetchError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(e) => Some(e),
            FetchError::Parse(e) => Some(e),
            FetchError::HttpStatus(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err)
    }
}

/// Result alias for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
