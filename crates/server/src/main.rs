//! QUADS MCP server entry point.
//!
//! Startup is the only place configuration is resolved; a configuration
//! failure here prevents the process from serving any tool.

mod config;
mod service;

use anyhow::Context as _;
use clap::Parser;
use quads_tools::runtime::QuadsGateway;
use rmcp::ServiceExt;
use service::QuadsService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "quads-mcp",
    version,
    about = "Expose the QUADS lab-reservation API as MCP tools"
)]
struct Cli {
    /// Path to the configuration file (JSON).
    #[arg(long, env = "QUADS_MCP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP transport; all logging goes to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let gateway =
        QuadsGateway::new(config.quads).context("resolve QUADS gateway configuration")?;
    tracing::info!(base_url = %gateway.base_url(), "starting QUADS MCP server");

    let service = QuadsService::new(gateway)
        .serve((tokio::io::stdin(), tokio::io::stdout()))
        .await
        .context("serve MCP over stdio")?;
    service.waiting().await.context("await MCP service shutdown")?;

    tracing::info!("QUADS MCP server stopped");
    Ok(())
}
