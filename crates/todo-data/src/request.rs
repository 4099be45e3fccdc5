//! HTTP request builder.

pub use reqwest::Method;

/// A request description: method and target URL.
///
/// Requests carry no body, no query string beyond the URL, and no headers
/// of their own.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_method_and_url() {
        let req = RequestBuilder::new(Method::GET, "http://localhost:3000");
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.url(), "http://localhost:3000");
    }
}
