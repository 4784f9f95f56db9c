//! Protmap CLI
//!
//! Command-line tools for protein accession mapping: resolve accessions
//! through the remote ID-mapping job workflow and post-process delimited
//! mapping tables.

mod commands;
mod config;
mod tabular;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "protmap")]
#[command(about = "Protein accession mapping CLI", long_about = None)]
struct Cli {
    /// ID-mapping service base URL
    #[arg(
        long,
        env = "PROTMAP_BASE_URL",
        default_value = "https://rest.uniprot.org"
    )]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Workflow progress goes to stderr via tracing; stdout carries results only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "protmap_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
    };

    handle_command(cli.command, &config).await
}
