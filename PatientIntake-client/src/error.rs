use std::sync::PoisonError;
use thiserror::Error;

/// Error type for backend API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure or unreadable response
    #[error("Error connecting to backend: {0}")]
    Connection(String),

    /// Error reported by the backend with an HTTP status
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Message extracted from the response body
        message: String,
    },
}

impl ClientError {
    /// Returns true when the call never produced a usable response.
    pub fn is_connection(&self) -> bool {
        matches!(self, ClientError::Connection(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        ClientError::Connection(error.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        // A response we cannot decode is treated the same as no response
        ClientError::Connection(error.to_string())
    }
}

/// Error type for session store operations
#[derive(Error, Debug)]
pub enum SessionError {
    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for SessionError {
    fn from(error: PoisonError<T>) -> Self {
        SessionError::Lock(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_display() {
        let error = ClientError::Connection("connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "Error connecting to backend: connection refused"
        );
        assert!(error.is_connection(), "Expected a connection error");
    }

    #[test]
    fn test_api_error_displays_backend_message() {
        let error = ClientError::Api {
            status: 400,
            message: "Patient already registered".to_string(),
        };
        assert_eq!(error.to_string(), "Patient already registered");
        assert!(!error.is_connection(), "API errors carry a response");
    }
}
