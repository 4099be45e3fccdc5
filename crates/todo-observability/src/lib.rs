//! Observability for todo page loads.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LoggingObserver` - Logs load phase transitions

mod logging;
mod observer;

pub use logging::*;
pub use observer::*;

// Re-export RequestId from todo-core for convenience
pub use todo_core::RequestId;
