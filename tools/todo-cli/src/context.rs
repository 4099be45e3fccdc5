//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration: file values with environment overrides.
    pub config: CliConfig,
    /// Config file the values came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file or by searching upward
    /// from the working directory, then apply environment overrides.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                CliConfig::find(&cwd)
            }
        };

        let mut config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        config
            .loader
            .apply_env()
            .context("Invalid loader settings in environment")?;

        Ok(Self {
            config,
            config_path,
            output,
        })
    }

    /// Describe where the configuration came from.
    pub fn config_source(&self) -> String {
        self.config_path
            .as_deref()
            .map(Path::display)
            .map(|p| p.to_string())
            .unwrap_or_else(|| "built-in defaults".to_string())
    }
}
