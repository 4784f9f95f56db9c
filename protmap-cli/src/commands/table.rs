//! Table command handlers
//!
//! Post-processing for delimited mapping tables: column projection and
//! numeric sorting.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::tabular::Table;

/// Table subcommands
#[derive(Subcommand)]
pub enum TableCommands {
    /// Project columns and sort rows by a numeric field, ascending
    Sort {
        /// Input table path
        #[arg(short, long)]
        input: PathBuf,

        /// Output table path
        #[arg(short, long)]
        output: PathBuf,

        /// Comma-separated columns to keep, in output order (default: all)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Column holding the numeric sort key
        #[arg(long)]
        by: String,

        /// Field delimiter
        #[arg(long, default_value_t = '\t')]
        delimiter: char,
    },
}

/// Handle table commands
pub fn handle_table_command(command: TableCommands) -> Result<()> {
    match command {
        TableCommands::Sort {
            input,
            output,
            columns,
            by,
            delimiter,
        } => sort_table(&input, &output, &columns, &by, delimiter),
    }
}

/// Load, project, sort, and write back a delimited table
fn sort_table(
    input: &PathBuf,
    output: &PathBuf,
    columns: &[String],
    by: &str,
    delimiter: char,
) -> Result<()> {
    let delimiter = u8::try_from(delimiter).context("Delimiter must be a single-byte character")?;

    let table = Table::read(input, delimiter)
        .with_context(|| format!("Failed to read table from {}", input.display()))?;

    let sorted = table.project(columns)?.sort_by_numeric(by)?;

    sorted
        .write(output, delimiter)
        .with_context(|| format!("Failed to write table to {}", output.display()))?;

    println!(
        "{}",
        format!(
            "Wrote {} row(s) sorted by '{}' to {}",
            sorted.len(),
            by,
            output.display()
        )
        .bold()
    );

    Ok(())
}
