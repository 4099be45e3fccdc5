//! Run the todos loader once.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use todo_core::{LoadContext, LoaderConfig, PageLoader};
use todo_data::TodosLoader;
use todo_observability::{LogFormat, LogLevel, LoggingObserver};

use super::LoadArgs;
use crate::context::Context;

/// Run the load command.
///
/// Prints the page envelope as JSON on stdout. Any load failure is
/// returned to the caller, which exits non-zero.
pub async fn run(args: LoadArgs, ctx: &Context) -> Result<()> {
    let config = effective_config(&args, &ctx.config.loader);
    config
        .validate()
        .context("Invalid loader configuration")?;

    let level = if ctx.output.is_verbose() {
        LogLevel::Debug
    } else {
        ctx.config.log.level
    };
    let format = if ctx.output.is_json() {
        LogFormat::Json
    } else {
        ctx.config.log.format
    };
    let observer = LoggingObserver::new(args.route.clone())
        .with_min_level(level)
        .with_format(format);

    ctx.output
        .debug(&format!("Fetching {} for {}", config.backend_url, args.route));

    let loader = TodosLoader::new(config)?
        .with_route(args.route.clone())
        .with_observer(Arc::new(observer));

    let mut load_ctx = LoadContext::new(args.route.clone());
    let data = loader
        .load(&mut load_ctx)
        .await
        .with_context(|| format!("Loading {} failed", args.route))?;

    ctx.output.json(&data);
    ctx.output.success(&format!(
        "Loaded {} in {}ms",
        args.route,
        load_ctx.timing.elapsed().as_millis()
    ));

    Ok(())
}

/// Apply command-line overrides on top of the loaded configuration.
fn effective_config(args: &LoadArgs, base: &LoaderConfig) -> LoaderConfig {
    let mut config = base.clone();
    if let Some(url) = &args.backend_url {
        config.backend_url = url.clone();
    }
    if let Some(ms) = args.timeout_ms {
        config.timeout_ms = Some(ms);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{exit_code, EXIT_CONFIG, EXIT_FAILURE};
    use crate::config::CliConfig;
    use crate::output::Output;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(backend_url: Option<&str>, timeout_ms: Option<u64>) -> LoadArgs {
        LoadArgs {
            backend_url: backend_url.map(String::from),
            timeout_ms,
            route: "/".to_string(),
        }
    }

    fn context() -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
        }
    }

    async fn backend(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_flags_override_config() {
        let base = LoaderConfig::new("http://from-file:3000");
        let config = effective_config(&args(Some("http://from-flag:4000"), Some(50)), &base);
        assert_eq!(config.backend_url, "http://from-flag:4000");
        assert_eq!(config.timeout_ms, Some(50));
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let mut base = LoaderConfig::new("http://from-file:3000");
        base.timeout_ms = Some(900);
        let config = effective_config(&args(None, None), &base);
        assert_eq!(config, base);
    }

    #[tokio::test]
    async fn test_load_succeeds_against_backend() {
        let server =
            backend(ResponseTemplate::new(200).set_body_json(serde_json::json!([]))).await;

        run(args(Some(&server.uri()), None), &context())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_backend_error_exits_one() {
        let server = backend(ResponseTemplate::new(500)).await;

        let err = run(args(Some(&server.uri()), None), &context())
            .await
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        assert!(format!("{:#}", err).contains("Failed to fetch todos"));
    }

    #[tokio::test]
    async fn test_bad_url_flag_exits_two() {
        let err = run(args(Some("ftp://x"), None), &context())
            .await
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_bad_config_file_url_exits_two() {
        let mut ctx = context();
        ctx.config.loader.backend_url = String::new();

        let err = run(args(None, None), &ctx).await.unwrap_err();
        assert_eq!(exit_code(&err), EXIT_CONFIG);
    }

    #[tokio::test]
    async fn test_zero_timeout_flag_exits_two() {
        let err = run(args(Some("http://127.0.0.1:1"), Some(0)), &context())
            .await
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_CONFIG);
    }
}
