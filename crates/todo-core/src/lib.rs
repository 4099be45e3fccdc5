//! Core abstractions for the todo page loader.
//!
//! This crate provides the fundamental types and traits:
//! - `PageLoader` trait - Loader interface invoked on navigation
//! - `PageData` - The `{ "todos": ... }` envelope handed to the page
//! - `LoadError` - Failure taxonomy surfaced to the rendering framework
//! - `LoaderConfig` - Backend endpoint configuration
//! - `LoadContext` - Per-navigation request id and timing
//! - `LoadPhase` - Pending/succeeded/failed lifecycle tracking

mod config;
mod context;
mod error;
mod lifecycle;
mod loader;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use loader::*;
