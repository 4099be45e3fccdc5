//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// An HTTP response whose status line has arrived.
///
/// The body is not read until `bytes` or `json` is awaited, so callers can
/// reject a status without waiting on the body.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        is_success_status(self.status())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The body is dropped unread on the error path.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::HttpError {
                status: self.status(),
            })
        }
    }

    /// Read the whole body.
    pub async fn bytes(self) -> Result<Vec<u8>, FetchError> {
        Ok(self.inner.bytes().await?.to_vec())
    }

    /// Read the whole body and parse it as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        let body = self.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::ParseError(e.to_string()))
    }
}
