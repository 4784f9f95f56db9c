//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod map;
mod table;

pub use map::MapArgs;
pub use table::TableCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an accession through the ID-mapping job workflow
    Map(MapArgs),
    /// Delimited-table utilities
    Table {
        #[command(subcommand)]
        command: TableCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Map(args) => map::handle_map_command(args, config).await,
        Commands::Table { command } => table::handle_table_command(command),
    }
}
