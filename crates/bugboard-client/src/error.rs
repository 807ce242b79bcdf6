//! Transport error taxonomy
//!
//! Both transport failures and non-2xx replies surface as an [`ApiError`].
//! The store's middleware renders these into a single human-readable
//! message before dispatching a failure action, so nothing past the
//! middleware boundary ever distinguishes the kinds.

use thiserror::Error;

/// Error produced by an [`ApiClient`](crate::ApiClient) request
///
/// Variants carry rendered strings rather than the underlying error values
/// so mocks can clone and compare them in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, closed socket)
    #[error("request failed: {0}")]
    Transport(String),

    /// The server replied with a non-2xx status
    #[error("server replied {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, or the canonical status reason when empty
        message: String,
    },

    /// The response body was not valid JSON
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "server replied 500: Internal Server Error");
    }

    #[test]
    fn test_decode_display() {
        let err = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid response body: expected value at line 1"
        );
    }
}
