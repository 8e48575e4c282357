//! Client error types

use reqwest::StatusCode;
use shared::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Service unreachable, timed out, or the transport failed
    #[error("{0}")]
    Connection(String),

    /// The service answered with an error body
    #[error("{message}")]
    Api {
        status: StatusCode,
        code: ErrorCode,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// True when the service could not be reached
    pub fn is_connection(&self) -> bool {
        matches!(self, ClientError::Connection(_))
    }

    /// Error code returned by the service, if any
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Connection(err.to_string())
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_message() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            code: ErrorCode::ValidationFailed,
            message: "End meter reading cannot be less than start reading".into(),
        };
        assert_eq!(
            err.to_string(),
            "End meter reading cannot be less than start reading"
        );
        assert!(!err.is_connection());
        assert_eq!(err.code(), Some(ErrorCode::ValidationFailed));
    }

    #[test]
    fn test_connection_error() {
        let err = ClientError::Connection("connection refused".into());
        assert!(err.is_connection());
        assert_eq!(err.code(), None);
    }
}
