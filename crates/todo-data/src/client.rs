//! Outbound HTTP client.

use std::time::{Duration, Instant};

use crate::request::{Method, RequestBuilder};
use crate::response::Response;
use crate::FetchError;

/// HTTP client for outbound requests.
///
/// A thin wrapper around a pooled `reqwest::Client`. Cloning is cheap and
/// clones share the connection pool. The client keeps no per-request
/// state.
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
    timeout: Option<Duration>,
}

impl FetchClient {
    /// Create a client with no request timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(None)
    }

    /// Create a client with an optional total request timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        Ok(Self { inner, timeout })
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::GET, url)
    }

    /// Send a request and return once the status line and headers arrive.
    ///
    /// The body is left unread; see [`Response::json`].
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let started = Instant::now();
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        let resp = self
            .inner
            .request(request.method, &request.url)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(url = %request.url, error = %e, "request failed");
                FetchError::from(e)
            })?;
        let response = Response::new(resp);

        tracing::debug!(
            url = %request.url,
            status = response.status(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "response headers received"
        );
        Ok(response)
    }
}
