//! Factcheck server binary
//!
//! Starts the HTTP server for PDF fact-checking.

use anyhow::{Context, Result};
use clap::Parser;
use factcheck_server::{config::ServiceConfig, start_server};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Fact-checking backend - extract claims from PDFs and verify them against live web data.
#[derive(Debug, Parser)]
#[command(name = "factcheck-server")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "FACTCHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address as host:port
    #[arg(short, long, env = "FACTCHECK_BIND")]
    bind: Option<String>,

    /// Print the effective configuration (without secrets) and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads FACTCHECK_* variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    config.apply_env();
    if let Some(bind) = &cli.bind {
        config.set_bind(bind).context("Invalid --bind")?;
    }

    if cli.print_config {
        print!("{}", config.to_toml().context("Failed to render config")?);
        return Ok(());
    }

    start_server(config).await.context("Server failed")?;
    Ok(())
}
