//! Serve command — run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use recase_core::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Validate kebab-case input by default.
    #[arg(long)]
    pub strict_kebab: bool,
}

/// Serve the case converters over MCP until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let strict_kebab = args.strict_kebab || config.strict_kebab;
    info!(strict_kebab, "starting MCP server on stdio");

    let service = ProjectServer::new(strict_kebab)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server task failed")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
