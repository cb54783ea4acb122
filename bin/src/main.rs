//! Earnings Feed CLI binary.
//!
//! Provides command-line access to filings, insider transactions,
//! institutional holdings and company data. Results are printed as JSON.

mod cmd;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use earningsfeed::{BASE_URL_ENV, Client, Config};
use std::{env, process};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "earningsfeed")]
#[command(about = "SEC filings, insider trades and 13F holdings from Earnings Feed", long_about = None)]
#[command(version)]
struct Cli {
    /// API key (defaults to EARNINGSFEED_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (defaults to EARNINGSFEED_BASE_URL or the public API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// SEC filings
    #[command(subcommand)]
    Filings(cmd::filings::FilingsCommand),

    /// Insider transactions (Forms 3, 4, 5)
    #[command(subcommand)]
    Insider(cmd::insider::InsiderCommand),

    /// Institutional holdings (13F)
    #[command(subcommand)]
    Institutional(cmd::institutional::InstitutionalCommand),

    /// Company profiles and search
    #[command(subcommand)]
    Companies(cmd::companies::CompaniesCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = connect(cli.api_key, cli.base_url)?;

    match cli.command {
        Commands::Filings(command) => cmd::filings::run(&client, command).await?,
        Commands::Insider(command) => cmd::insider::run(&client, command).await?,
        Commands::Institutional(command) => cmd::institutional::run(&client, command).await?,
        Commands::Companies(command) => cmd::companies::run(&client, command).await?,
    }

    client.close();
    Ok(())
}

/// Build a client from flags, falling back to the environment.
fn connect(api_key: Option<String>, base_url: Option<String>) -> Result<Client> {
    let config = resolve_config(api_key, base_url, env::var(BASE_URL_ENV).ok())?;
    Ok(Client::with_config(config)?)
}

/// Flags win over the environment for each setting independently.
fn resolve_config(
    api_key: Option<String>,
    base_url: Option<String>,
    env_base_url: Option<String>,
) -> Result<Config> {
    let mut config = match api_key {
        Some(key) => Config::new(key),
        None => Config::from_env()?,
    };
    if let Some(url) = base_url.or(env_base_url) {
        config = config.with_base_url(url);
    }
    Ok(config)
}
