//! Map command handler
//!
//! Drives the submit/poll/fetch workflow for a single accession and prints
//! the mapped identifiers.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::*;
use protmap_client::{IdMappingClient, PollPolicy};
use protmap_core::domain::mapping::{DEFAULT_FROM_DB, DEFAULT_TO_DB, MappingRequest};

use crate::config::Config;

/// Delay growth between status polls
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackoffMode {
    /// Constant delay between polls
    Fixed,
    /// Delay doubles after each poll, capped at --max-interval-ms
    Exponential,
}

/// Arguments for the `map` command
#[derive(Args)]
pub struct MapArgs {
    /// Source accession to map (e.g. WP_001338221.1)
    pub accession: String,

    /// Source namespace
    #[arg(long, default_value = DEFAULT_FROM_DB)]
    pub from_db: String,

    /// Target namespace
    #[arg(long, default_value = DEFAULT_TO_DB)]
    pub to_db: String,

    /// Delay between status polls, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub poll_interval_ms: u64,

    /// Maximum number of status polls before giving up
    #[arg(long, default_value_t = 120)]
    pub max_polls: u32,

    /// Delay growth between polls
    #[arg(long, value_enum, default_value_t = BackoffMode::Fixed)]
    pub backoff: BackoffMode,

    /// Backoff cap for --backoff exponential, in milliseconds
    #[arg(long, default_value_t = 30_000)]
    pub max_interval_ms: u64,

    /// Print the result as a JSON array instead of formatted text
    #[arg(long)]
    pub json: bool,
}

/// Handle the map command
pub async fn handle_map_command(args: MapArgs, config: &Config) -> Result<()> {
    let policy = match args.backoff {
        BackoffMode::Fixed => PollPolicy::fixed(
            Duration::from_millis(args.poll_interval_ms),
            args.max_polls,
        ),
        BackoffMode::Exponential => PollPolicy::exponential(
            Duration::from_millis(args.poll_interval_ms),
            args.max_polls,
            Duration::from_millis(args.max_interval_ms),
        ),
    };
    policy.validate().context("Invalid polling configuration")?;

    let client = IdMappingClient::new(&config.base_url).with_poll_policy(policy);
    let request = MappingRequest::with_namespaces(&args.from_db, &args.to_db, &args.accession);

    let accessions = client
        .resolve(&request)
        .await
        .with_context(|| format!("Failed to map accession '{}'", args.accession))?;

    if args.json {
        println!("{}", serde_json::to_string(&accessions)?);
        return Ok(());
    }

    if accessions.is_empty() {
        println!(
            "{}",
            format!("No {} mapping found for {}.", args.to_db, args.accession).yellow()
        );
    } else {
        println!(
            "{}",
            format!(
                "{} mapping(s) for {} ({} -> {}):",
                accessions.len(),
                args.accession,
                args.from_db,
                args.to_db
            )
            .bold()
        );
        for accession in &accessions {
            println!("  {} {}", "▸".cyan(), accession);
        }
    }

    Ok(())
}
