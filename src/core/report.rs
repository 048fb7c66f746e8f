//! Failure reporting for caught, non-fatal errors.

use std::error::Error;

/// Log a failed user-facing operation on `target` (a file id, or the
/// listing itself) with its error chain.
pub fn report_failure(operation: &str, target: &str, error: &dyn Error) {
    let chain = error_chain(error);
    tracing::error!(operation, target, error = %chain, "operation failed");
}

/// Join an error with its sources. A cause already printed by its parent's
/// message is not repeated.
fn error_chain(error: &dyn Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !chain.ends_with(&text) {
            chain.push_str(": ");
            chain.push_str(&text);
        }
        source = cause.source();
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{FetchError, ServiceError};

    #[test]
    fn test_transport_source_logged_once() {
        let err = ServiceError::transport("list files", FetchError::HttpError(503));
        assert_eq!(error_chain(&err), "list files failed: HTTP error: 503");
    }

    #[test]
    fn test_error_without_source() {
        let err = ServiceError::UnknownFile("9".to_string());
        assert_eq!(error_chain(&err), "unknown file: 9");
    }
}
