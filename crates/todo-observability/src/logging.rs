//! Structured logging with request context.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use todo_core::RequestId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Error parsing a log level or format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseLogSettingError {
    kind: &'static str,
    value: String,
}

impl FromStr for LogLevel {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ParseLogSettingError {
                kind: "log level",
                value: s.to_string(),
            }),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl FromStr for LogFormat {
    type Err = ParseLogSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            _ => Err(ParseLogSettingError {
                kind: "log format",
                value: s.to_string(),
            }),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Request ID for correlation.
    pub request_id: String,
    /// Page route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(route) = &self.route {
            s.push_str(&format!(" route={}", route));
        }

        if let Some(elapsed) = self.elapsed_us {
            s.push_str(&format!(" ({}us)", elapsed));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Format according to `format`.
    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Human => self.to_human(),
        }
    }
}

/// Structured logger bound to one load.
///
/// Writes one line per entry to stderr, tagged with the request ID and
/// the time since the logger was created.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    route: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    /// Create a new logger with request context.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            route: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
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

    /// Whether entries at `level` are emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Build the entry that would be emitted, or `None` if filtered out.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: HashMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if !self.enabled(level) {
            return None;
        }

        Some(LogEntry {
            level,
            message: message.to_string(),
            request_id: self.request_id.to_string(),
            route: self.route.clone(),
            fields,
            elapsed_us: Some(self.start_time.elapsed().as_micros() as u64),
        })
    }

    fn log(&self, level: LogLevel, message: &str, fields: HashMap<String, serde_json::Value>) {
        if let Some(entry) = self.entry(level, message, fields) {
            eprintln!("{}", entry.render(self.format));
        }
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    /// Build the entry without emitting it.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building a log entry at `level`.
    pub fn builder(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, level, message)
    }

    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("req-1")).with_route("/")
    }

    #[test]
    fn test_entry_json_has_request_context() {
        let entry = logger()
            .info_builder("page loaded")
            .field("phase", "succeeded")
            .build()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["message"], "page loaded");
        assert_eq!(value["request_id"], "req-1");
        assert_eq!(value["route"], "/");
        assert_eq!(value["phase"], "succeeded");
    }

    #[test]
    fn test_entry_human_format() {
        let entry = logger()
            .error_builder("load failed")
            .field("error", "Failed to fetch todos")
            .build()
            .unwrap();

        let line = entry.to_human();
        assert!(line.starts_with("[ERROR] load failed route=/"));
        assert!(line.contains(r#"error="Failed to fetch todos""#));
    }

    #[test]
    fn test_min_level_filters_entries() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(logger.builder(LogLevel::Info, "quiet").build().is_none());
        assert!(logger.builder(LogLevel::Error, "loud").build().is_some());
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_duration_field_in_millis() {
        let entry = logger()
            .info_builder("timed")
            .duration_ms("elapsed_ms", Duration::from_millis(42))
            .build()
            .unwrap();
        assert_eq!(entry.fields["elapsed_ms"], serde_json::json!(42));
    }

    #[test]
    fn test_parse_levels_and_formats() {
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());

        assert_eq!("human".parse::<LogFormat>(), Ok(LogFormat::Human));
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
