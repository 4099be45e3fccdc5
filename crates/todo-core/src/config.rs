//! Loader configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Backend used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://0.0.0.0:3000";

/// Environment variable overriding the backend URL.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Environment variable setting a request timeout in milliseconds.
pub const BACKEND_TIMEOUT_ENV: &str = "BACKEND_TIMEOUT_MS";

/// Configuration for the todos loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// URL the loader issues its GET against.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Optional request timeout. Absent means the request may wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout_ms: None,
        }
    }
}

impl LoaderConfig {
    /// Create a configuration pointing at `backend_url`.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            timeout_ms: None,
        }
    }

    /// Set a request timeout.
    ///
    /// Sub-millisecond remainders round up, so a nonzero duration never
    /// becomes a zero timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let ms = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = Some(u64::try_from(ms).unwrap_or(u64::MAX));
        self
    }

    /// Get the request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_ENV) {
            self.backend_url = url;
        }

        if let Some(raw) = lookup(BACKEND_TIMEOUT_ENV) {
            let ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: BACKEND_TIMEOUT_ENV.to_string(),
                value: raw.clone(),
            })?;
            if ms == 0 {
                return Err(ConfigError::InvalidValue {
                    key: BACKEND_TIMEOUT_ENV.to_string(),
                    value: raw,
                });
            }
            self.timeout_ms = Some(ms);
        }

        Ok(())
    }

    /// Check that the backend URL is usable and any timeout is nonzero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                key: "timeout_ms".to_string(),
                value: "0".to_string(),
            });
        }

        let url = self.backend_url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyBackendUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(url.to_string()));
        }
        Ok(())
    }
}
