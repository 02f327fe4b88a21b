//! Export command - page records in machine-readable formats

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::{builder::build_page_graph, cli::output, export, record::emit_records};

#[derive(Parser, Debug)]
#[command(about = "Export page records for analysis")]
pub struct ExportArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export format
    #[arg(long, short = 'f', default_value = "csv")]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    Csv,
    /// JSON format
    Json,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let spinner = output::create_spinner("Building page catalog...");
    let graph = build_page_graph()?;
    spinner.finish_and_clear();

    let records = emit_records(&graph);
    match args.format {
        ExportFormat::Csv => export::write_csv(&records, &args.output)?,
        ExportFormat::Json => export::write_json(&records, &args.output)?,
    }

    println!(
        "✓ Exported {} pages to: {}",
        records.len(),
        args.output.display()
    );
    Ok(())
}
