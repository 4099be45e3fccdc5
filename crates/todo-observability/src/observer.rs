//! Load phase logging.

use std::time::Duration;

use todo_core::{LoadObserver, LoadPhase, RequestId};

use crate::logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};

/// Logs every load phase transition as a structured entry.
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    route: String,
    min_level: LogLevel,
    format: LogFormat,
}

impl LoggingObserver {
    /// Create an observer for loads of `route`.
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn logger(&self, request_id: &RequestId) -> StructuredLogger {
        StructuredLogger::new(request_id.clone())
            .with_route(self.route.clone())
            .with_min_level(self.min_level)
            .with_format(self.format)
    }

    /// The entry logged for a phase, if it passes the level filter.
    pub fn entry_for(
        &self,
        request_id: &RequestId,
        phase: &LoadPhase,
        elapsed: Duration,
    ) -> Option<LogEntry> {
        let logger = self.logger(request_id);
        phase_entry(&logger, phase, elapsed).build()
    }
}

fn phase_entry<'a>(
    logger: &'a StructuredLogger,
    phase: &LoadPhase,
    elapsed: Duration,
) -> LogBuilder<'a> {
    let builder = match phase {
        LoadPhase::Pending => logger.builder(LogLevel::Debug, "page load started"),
        LoadPhase::Succeeded => logger.info_builder("page load succeeded"),
        LoadPhase::Failed(reason) => logger
            .error_builder("page load failed")
            .field("error", reason.as_str()),
    };

    builder
        .field("phase", phase.name())
        .duration_ms("elapsed_ms", elapsed)
}

impl LoadObserver for LoggingObserver {
    fn on_phase(&self, request_id: &RequestId, phase: &LoadPhase, elapsed: Duration) {
        let logger = self.logger(request_id);
        phase_entry(&logger, phase, elapsed).emit();
    }
}
