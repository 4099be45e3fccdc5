//! CLI command implementations.

pub mod config;
pub mod load;

use clap::Args;
use todo_core::{ConfigError, LoadError};

/// Exit code for a failed command.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for unusable configuration.
pub const EXIT_CONFIG: i32 = 2;

/// Map a command error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let config_error = err.downcast_ref::<ConfigError>().is_some()
        || matches!(err.downcast_ref::<LoadError>(), Some(LoadError::Config(_)));
    if config_error {
        EXIT_CONFIG
    } else {
        EXIT_FAILURE
    }
}

/// Arguments for the load command.
#[derive(Args)]
pub struct LoadArgs {
    /// Backend URL (overrides config file and BACKEND_URL).
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Request timeout in milliseconds (overrides config file and BACKEND_TIMEOUT_MS).
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Route to report in logs.
    #[arg(long, default_value = "/")]
    pub route: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Validate the configuration and exit non-zero if it is unusable.
    #[arg(long)]
    pub check: bool,
}
