//! playbook CLI - generate a playable Tic-Tac-Toe flipbook
//!
//! This CLI provides a unified interface for:
//! - Generating the book and reference-table artifacts
//! - Exporting page records as CSV or JSON
//! - Printing catalog statistics

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "playbook")]
#[command(version, about = "Generate a playable Tic-Tac-Toe flipbook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the catalog and write the book and table artifacts
    Generate(playbook::cli::commands::generate::GenerateArgs),

    /// Export page records as CSV or JSON
    Export(playbook::cli::commands::export::ExportArgs),

    /// Print catalog statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => playbook::cli::commands::generate::execute(args),
        Commands::Export(args) => playbook::cli::commands::export::execute(args),
        Commands::Stats => playbook::cli::commands::stats::execute(),
    }
}
