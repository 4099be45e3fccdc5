//! Per-navigation load context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::lifecycle::TimingContext;

/// Unique identifier for a single loader invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:x}", timestamp, counter))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context passed to a loader for one navigation.
///
/// A fresh context is created per navigation; nothing in it is shared
/// between invocations.
#[derive(Debug)]
pub struct LoadContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// Page route being navigated to.
    pub route: String,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl LoadContext {
    /// Create a context for a navigation to `route`.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::generate(),
            route: route.into(),
            timing: TimingContext::new(),
        }
    }

    /// Use a caller-supplied request ID.
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }
}

impl Default for LoadContext {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation_is_unique() {
        let id1 = RequestId::generate();
        let id2 = RequestId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::from_string("req-42");
        assert_eq!(id.to_string(), "req-42");
        assert_eq!(id.as_str(), "req-42");
    }

    #[test]
    fn test_context_defaults_to_root_route() {
        let ctx = LoadContext::default();
        assert_eq!(ctx.route, "/");
    }

    #[test]
    fn test_context_with_request_id() {
        let ctx = LoadContext::new("/todos").with_request_id(RequestId::from_string("fixed"));
        assert_eq!(ctx.request_id.as_str(), "fixed");
        assert_eq!(ctx.route, "/todos");
    }
}
