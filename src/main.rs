use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{error, info};
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use std::sync::Arc;

use dice_server::mcp::DiceServer;
use dice_server::tools::{DiceToolRouter, InvocationRequest, ToolRouter};

mod cli;
mod config;

use cli::{Cli, Commands};
use config::Config;

fn setup_logging(config: &Config) -> Result<()> {
    let target = Box::new(config.open_log_file()?);

    // Stdout carries the protocol, so logs only go to the file
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", config.log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    let router = Arc::new(DiceToolRouter::default());

    match &cli.command {
        None | Some(Commands::Serve) => handle_serve_command(router, config).await,
        Some(Commands::Tools) => handle_tools_command(router, config),
        Some(Commands::Call { tool, args }) => handle_call_command(router.as_ref(), tool, args).await,
    }
}

async fn handle_serve_command(router: Arc<DiceToolRouter>, config: &Config) -> Result<()> {
    let server = DiceServer::new(router).with_identity(&config.name, &config.version);
    info!("Starting {} v{} on stdio", server.name(), server.version());

    let service = server
        .serve(stdio())
        .await
        .context("Failed to connect stdio transport")?;
    eprintln!("Dice MCP server running on stdio");

    let reason = service.waiting().await.context("MCP service task failed")?;
    info!("Server stopped: {:?}", reason);
    Ok(())
}

fn handle_tools_command(router: Arc<DiceToolRouter>, config: &Config) -> Result<()> {
    let server = DiceServer::new(router).with_identity(&config.name, &config.version);
    let listing = serde_json::to_string_pretty(&server.list_tools_result())
        .context("Failed to serialize tool catalog")?;
    println!("{}", listing);
    Ok(())
}

async fn handle_call_command(router: &DiceToolRouter, tool: &str, args: &str) -> Result<()> {
    info!("Calling tool {} with {}", tool, args);
    let outcome = match InvocationRequest::parse(tool, args) {
        Ok(request) => router.invoke(request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(result) => {
            println!("{}", result.joined_text());
            Ok(())
        }
        Err(e) => {
            error!("Tool {} failed: {}", tool, e);
            eprintln!("{}: {}", e.kind().to_string().red(), e);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Resolve configuration from flags
    let config = Config::from_cli(&cli);

    if let Err(e) = setup_logging(&config).context("Failed to setup logging") {
        eprintln!("Server error: {:?}", e);
        std::process::exit(1);
    }

    if let Err(e) = run_application(&cli, &config).await {
        error!("Server error: {:?}", e);
        eprintln!("Server error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
