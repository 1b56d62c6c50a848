//! # Main Entry Point
//!
//! Connects to an MCP weather server, lists its tools and prints
//! the alerts and forecast for the configured location:
//! - Domain: Configuration, Types and Traits
//! - Infrastructure: MCP client
//! - Application: Session Runner, Report, Logging
//! - Interface: Command-line arguments
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use clap::Parser;

use crate::application::logging;
use crate::application::runner::SessionRunner;
use crate::domain::config::AppConfig;
use crate::infrastructure::mcp::McpConnector;
use crate::interface::cli::CliArgs;
use crate::strings::logs;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration
    let args = CliArgs::parse();
    let loaded = AppConfig::load(&args.config)?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    args.apply(&mut config);

    // 2. Logging
    let _guard = logging::init(&config.logging)?;
    if !config_found {
        tracing::info!("{}", logs::config_missing(&args.config.display().to_string()));
    }

    // 3. Session
    let connector = McpConnector::new(&config.server, &config.client);
    tracing::info!("{}", logs::starting(connector.endpoint()));
    let runner = SessionRunner::new(config.alerts.clone(), config.forecast.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&connector, &mut out).await
}
