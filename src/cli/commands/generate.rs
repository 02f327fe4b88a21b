//! Generate command - build the catalog and write both artifacts

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    builder::build_page_graph,
    cli::output,
    record::emit_records,
    render::{table, text},
};

#[derive(Parser, Debug)]
#[command(about = "Build the catalog and write the book and table artifacts")]
pub struct GenerateArgs {
    /// Output path for the reader-facing book
    #[arg(long, default_value = "book.txt")]
    pub book: PathBuf,

    /// Output path for the fixed-width reference table
    #[arg(long, default_value = "table.txt")]
    pub table: PathBuf,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let spinner = output::create_spinner("Building page catalog...");
    let graph = build_page_graph()?;
    spinner.finish_and_clear();

    let records = emit_records(&graph);

    text::write_book(&records, &args.book)?;
    println!("✓ Book written to: {}", args.book.display());

    table::write_table(&records, &args.table)?;
    println!("✓ Table written to: {}", args.table.display());

    println!("Pages written: {}", records.len());
    Ok(())
}
