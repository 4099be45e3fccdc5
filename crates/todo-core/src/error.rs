//! Error types for page loading.

use thiserror::Error;

/// Message shown when the backend answers with a non-success status.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch todos";

/// Errors a loader raises to the rendering framework.
///
/// None of these are recovered locally; the framework decides how the
/// failure is presented.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request could not complete (DNS, refused connection, timeout).
    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    /// A response arrived but its status was outside 200-299.
    #[error("Failed to fetch todos")]
    BackendHttpError { status: u16 },

    /// The response body could not be parsed as JSON.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The loader was built from an invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoadError {
    /// Whether the failure originated in the network layer.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::BackendUnreachable(_))
    }

    /// The HTTP status, for `BackendHttpError`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BackendHttpError { status } => Some(*status),
            _ => None,
        }
    }
}

/// Errors in loader configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The backend URL was empty.
    #[error("Configuration error: backend URL is empty")]
    EmptyBackendUrl,

    /// The backend URL does not use http or https.
    #[error("Configuration error: backend URL must start with http:// or https://, got {0}")]
    UnsupportedScheme(String),

    /// A numeric setting could not be parsed.
    #[error("Configuration error: invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
