//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ServiceError`] - Failed directory operations (the UI's "fetch failed")
//! - [`ClipboardError`] - Copy-to-clipboard failures

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// A directory operation that did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The request could not be delivered or answered.
    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: FetchError,
    },
    /// No file with this id or content uuid.
    #[error("unknown file: {0}")]
    UnknownFile(String),
    /// No grant with this id on the file.
    #[error("unknown share {share_id} on file {file_id}")]
    UnknownShare { file_id: String, share_id: String },
}

impl ServiceError {
    pub fn transport(operation: &'static str, source: FetchError) -> Self {
        Self::Transport { operation, source }
    }

    /// True when the request ran out of time rather than being rejected.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                source: FetchError::Timeout,
                ..
            }
        )
    }
}

/// Copy-to-clipboard failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No window or clipboard API in this context.
    #[error("clipboard unavailable")]
    Unavailable,
    /// The browser refused the write (permissions, focus).
    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),
    /// Another copy is still in progress.
    #[error("a copy is already in progress")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_messages() {
        let err = ServiceError::transport("list files", FetchError::HttpError(503));
        assert_eq!(err.to_string(), "list files failed: HTTP error: 503");
        assert!(!err.is_timeout());

        let err = ServiceError::transport("share grants", FetchError::Timeout);
        assert!(err.is_timeout());

        let err = ServiceError::UnknownShare {
            file_id: "1".to_string(),
            share_id: "9".to_string(),
        };
        assert_eq!(err.to_string(), "unknown share 9 on file 1");
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = ServiceError::transport("download", FetchError::NoWindow);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Browser window not available"));
    }
}
