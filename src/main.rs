//! model-router - context-aware AI model routing service
//!
//! Loads the router configuration, wires the edge gateway and serves the HTTP API.

#![allow(missing_docs)]

use clap::Parser;
use model_router::server::HttpServer;
use model_router::{Config, EdgeFunctionGateway, GatewayError, GatewaySet, Router};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "model-router", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "MODEL_ROUTER_CONFIG", default_value = "config/router.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long, env = "MODEL_ROUTER_HOST")]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long, env = "MODEL_ROUTER_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Pick up API keys from a local .env before anything reads them
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), GatewayError> {
    let mut config = Config::from_file_or_default(&args.config).await?;
    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }

    let edge = EdgeFunctionGateway::new(config.edge())
        .map_err(|e| GatewayError::config(format!("Failed to create edge gateway: {}", e)))?;
    info!("Forwarding model calls to {}", config.edge().base_url);

    let router = Router::from_config(&config, GatewaySet::uniform(Arc::new(edge)))?;

    HttpServer::new(&config, router).start().await
}
