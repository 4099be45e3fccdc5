//! Show the effective configuration.

use anyhow::Result;

use super::ConfigArgs;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    if args.check {
        ctx.config.loader.validate()?;
    }

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    ctx.output.kv("source", &ctx.config_source());

    println!("\n[loader]");
    ctx.output.kv("backend_url", &ctx.config.loader.backend_url);
    match ctx.config.loader.timeout_ms {
        Some(ms) => ctx.output.kv("timeout_ms", &ms.to_string()),
        None => ctx.output.kv("timeout_ms", "none"),
    }

    println!("\n[log]");
    ctx.output.kv("level", &ctx.config.log.level.to_string());
    ctx.output.kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());

    if args.check {
        ctx.output.success("Configuration is valid");
    }

    Ok(())
}
