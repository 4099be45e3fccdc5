//! The todos page loader.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use todo_core::{
    LoadContext, LoadError, LoadObserver, LoadPhase, LoaderConfig, PageData, PageLoader,
};

use crate::client::FetchClient;

/// One todo item as served by the backend.
///
/// Optional typed view over the payload; the loader itself passes the
/// payload through without checking it against this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub status: bool,
}

/// Loads the todo list for the index page.
///
/// Each call issues exactly one GET to the configured backend URL, with no
/// query string, body, or added headers. A non-2xx status fails the load
/// before the body is looked at.
pub struct TodosLoader {
    config: LoaderConfig,
    client: FetchClient,
    route: String,
    observer: Option<Arc<dyn LoadObserver>>,
}

impl TodosLoader {
    /// Build a loader from configuration.
    pub fn new(config: LoaderConfig) -> Result<Self, LoadError> {
        config.validate()?;
        let client = FetchClient::with_timeout(config.timeout())?;

        Ok(Self {
            config,
            client,
            route: "/".to_string(),
            observer: None,
        })
    }

    /// Set the route this loader serves.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Report phase transitions to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// The configuration this loader was built from.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn report(&self, ctx: &LoadContext, phase: &LoadPhase) {
        if let Some(observer) = &self.observer {
            observer.on_phase(&ctx.request_id, phase, ctx.timing.elapsed());
        }
    }

    async fn fetch_todos(&self, ctx: &mut LoadContext) -> Result<PageData, LoadError> {
        ctx.timing.mark("request_sent");
        let response = self
            .client
            .send(self.client.get(&self.config.backend_url))
            .await?;
        ctx.timing.mark("response_received");

        let response = response.error_for_status()?;
        let todos: serde_json::Value = response.json().await?;
        ctx.timing.mark("body_parsed");

        Ok(PageData::new(todos))
    }
}

#[async_trait]
impl PageLoader for TodosLoader {
    fn route(&self) -> &str {
        &self.route
    }

    async fn load(&self, ctx: &mut LoadContext) -> Result<PageData, LoadError> {
        self.report(ctx, &LoadPhase::Pending);

        let result = self.fetch_todos(ctx).await;
        match &result {
            Ok(_) => self.report(ctx, &LoadPhase::Succeeded),
            Err(e) => self.report(ctx, &LoadPhase::Failed(e.to_string())),
        }

        result
    }
}
