//! Loader trait and page data envelope.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::context::LoadContext;
use crate::error::LoadError;

/// Data handed to the page template.
///
/// Serializes to exactly `{"todos": <payload>}`. The payload is whatever
/// JSON the backend returned, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub todos: serde_json::Value,
}

impl PageData {
    /// Wrap a backend payload.
    pub fn new(todos: serde_json::Value) -> Self {
        Self { todos }
    }

    /// Borrow the payload.
    pub fn todos(&self) -> &serde_json::Value {
        &self.todos
    }

    /// Consume the envelope and return the payload.
    pub fn into_todos(self) -> serde_json::Value {
        self.todos
    }

    /// Interpret the payload as a typed value.
    ///
    /// The loader never does this itself; it is for templates that want
    /// typed access.
    pub fn todos_as<T: DeserializeOwned>(&self) -> Result<T, LoadError> {
        T::deserialize(&self.todos).map_err(|e| LoadError::MalformedResponse(e.to_string()))
    }
}

/// A loader invoked by the rendering framework before a page is shown.
#[async_trait]
pub trait PageLoader: Send + Sync {
    /// Route this loader supplies data for.
    fn route(&self) -> &str;

    /// Produce the page's data, or fail the navigation.
    async fn load(&self, ctx: &mut LoadContext) -> Result<PageData, LoadError>;
}
