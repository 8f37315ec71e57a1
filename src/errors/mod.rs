//! Error types for the Google Drive connector.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for Drive operations.
pub type DriveResult<T> = Result<T, DriveError>;

/// Top-level error type for the connector.
///
/// Three kinds matter to callers: [`DriveError::InvalidArgument`] is raised
/// locally before any network call, [`DriveError::TokenExpired`] is the
/// distinguished signal an external OAuth layer uses to invalidate the stored
/// access token, and everything else is a remote or transport failure
/// surfaced unchanged. No variant is ever retried by this crate.
#[derive(Debug, Error)]
pub enum DriveError {
    /// A required argument was null, blank, or otherwise unusable. Raised
    /// before any request is built.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The connector configuration is incomplete or inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operation was invoked before `authorize` established a client.
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// The remote service rejected the stored access token. The external
    /// OAuth layer reacts by dropping the token; the current call still
    /// fails.
    #[error("Access token expired or revoked: {0}")]
    TokenExpired(String),

    /// The remote service rejected the request.
    #[error("Drive API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Machine-readable reason from the error envelope, when present.
        reason: Option<String>,
        /// Human-readable message.
        message: String,
    },

    /// The request could not be executed (connection, DNS, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The response body could not be interpreted.
    #[error("Response error: {0}")]
    Response(String),
}

impl DriveError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DriveError::InvalidArgument(msg.into())
    }

    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        DriveError::Configuration(msg.into())
    }

    /// Creates a response error.
    pub fn response(msg: impl Into<String>) -> Self {
        DriveError::Response(msg.into())
    }

    /// Returns true if this error is the token-invalidation signal.
    pub fn is_token_expired(&self) -> bool {
        matches!(self, DriveError::TokenExpired(_))
    }

    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DriveError::TokenExpired(_) => Some(StatusCode::UNAUTHORIZED),
            DriveError::Api { status, .. } => StatusCode::from_u16(*status).ok(),
            _ => None,
        }
    }
}

/// Transport-level failures, mapped into [`DriveError`] at the client layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout error.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// HTTP protocol error.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Network(err.to_string())
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

impl From<TransportError> for DriveError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(msg) => DriveError::Timeout(msg),
            TransportError::Network(msg) => DriveError::Network(msg),
            TransportError::Http(msg) => DriveError::Network(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_expired_is_the_invalidation_signal() {
        let err = DriveError::TokenExpired("expired".to_string());
        assert!(err.is_token_expired());
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

        let err = DriveError::InvalidArgument("blank url".to_string());
        assert!(!err.is_token_expired());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn api_error_carries_status() {
        let err = DriveError::Api {
            status: 404,
            reason: Some("notFound".to_string()),
            message: "File not found".to_string(),
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn transport_error_maps_to_drive_error() {
        let err: DriveError = TransportError::Timeout("30s elapsed".to_string()).into();
        assert!(matches!(err, DriveError::Timeout(_)));

        let err: DriveError = TransportError::Network("refused".to_string()).into();
        assert!(matches!(err, DriveError::Network(_)));
    }
}
