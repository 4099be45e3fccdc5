//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use todo_core::LoaderConfig;
use todo_observability::{LogFormat, LogLevel};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["todo-page.toml", ".todo-page.toml", "todo-page.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Loader configuration.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config from TOML or JSON text.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Find a config file in `start` or any of its parents.
    pub fn find(start: &Path) -> Option<std::path::PathBuf> {
        start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level for load phase logs.
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CliConfig::parse("", false).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.loader.backend_url, "http://0.0.0.0:3000");
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
            [loader]
            backend_url = "http://localhost:8000/todos"
            timeout_ms = 1500

            [log]
            level = "debug"
            format = "human"
        "#;
        let config = CliConfig::parse(content, false).unwrap();
        assert_eq!(config.loader.backend_url, "http://localhost:8000/todos");
        assert_eq!(config.loader.timeout_ms, Some(1500));
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Human);
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{"loader": {"backend_url": "https://todos.example.com"}}"#;
        let config = CliConfig::parse(content, true).unwrap();
        assert_eq!(config.loader.backend_url, "https://todos.example.com");
        assert_eq!(config.loader.timeout_ms, None);
    }

    #[test]
    fn test_parse_rejects_unknown_level() {
        assert!(CliConfig::parse("[log]\nlevel = \"shout\"\n", false).is_err());
    }

    #[test]
    fn test_find_walks_up_to_parent() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("app").join("pages");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join("todo-page.toml"),
            "[loader]\nbackend_url = \"http://parent:3000\"\n",
        )
        .unwrap();

        let found = CliConfig::find(&nested).unwrap();
        assert_eq!(found, root.path().join("todo-page.toml"));

        let config = CliConfig::load(&found).unwrap();
        assert_eq!(config.loader.backend_url, "http://parent:3000");
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo-page.json");
        std::fs::write(&path, r#"{"log": {"format": "human"}}"#).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.log.format, LogFormat::Human);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(&dir.path().join("absent.toml")).is_err());
    }
}
