//! HTTP client and page loader for the todo page.
//!
//! `FetchClient` makes outbound requests with a small builder API;
//! `TodosLoader` uses it to fetch the todo list and wrap it in the page
//! envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! use todo_core::{LoadContext, LoaderConfig, PageLoader};
//! use todo_data::TodosLoader;
//!
//! let mut config = LoaderConfig::default();
//! config.apply_env()?;
//!
//! let loader = TodosLoader::new(config)?;
//! let data = loader.load(&mut LoadContext::new("/")).await?;
//! println!("{}", serde_json::to_string(&data)?);
//! ```

mod client;
mod error;
mod request;
mod response;
mod todos;

pub use client::FetchClient;
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use todos::{Todo, TodosLoader};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response, TodosLoader};
    pub use todo_core::{LoadContext, LoadError, LoaderConfig, PageData, PageLoader};
}
