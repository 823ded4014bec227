mod cli;
mod config;
mod http;
mod service;
mod views;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use service::GatewayService;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;

    agentdeck_logging::init_logging_with_format(&config.logging.level, config.logging.format)?;

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            GatewayService::new(config).run().await
        }
        command => cli::run(command, config).await,
    }
}
