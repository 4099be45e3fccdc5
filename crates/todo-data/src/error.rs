//! HTTP client error types.

use thiserror::Error;
use todo_core::LoadError;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to build or send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Could not connect to the host.
    #[error("Connection failed: {0}")]
    ConnectError(String),

    /// The response status was outside 200-299.
    #[error("HTTP {status}")]
    HttpError { status: u16 },

    /// Failed to read or parse the response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::ConnectError(e.to_string())
        } else if e.is_decode() {
            FetchError::ParseError(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::HttpError { status } => LoadError::BackendHttpError { status },
            FetchError::ParseError(message) => LoadError::MalformedResponse(message),
            other => LoadError::BackendUnreachable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_map_to_unreachable() {
        let err: LoadError = FetchError::ConnectError("refused".into()).into();
        assert!(err.is_network());

        let err: LoadError = FetchError::Timeout.into();
        assert!(matches!(err, LoadError::BackendUnreachable(ref m) if m == "Request timed out"));

        let err: LoadError = FetchError::RequestError("bad uri".into()).into();
        assert!(err.is_network());
    }

    #[test]
    fn test_http_error_keeps_status() {
        let err: LoadError = FetchError::HttpError { status: 503 }.into();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "Failed to fetch todos");
    }

    #[test]
    fn test_parse_error_maps_to_malformed() {
        let err: LoadError = FetchError::ParseError("EOF".into()).into();
        assert!(matches!(err, LoadError::MalformedResponse(ref m) if m == "EOF"));
    }
}
