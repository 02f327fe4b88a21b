//! Stats command - summary statistics for the catalog

use anyhow::Result;

use crate::{
    builder::{Outcome, build_page_graph},
    cli::output,
};

pub fn execute() -> Result<()> {
    let spinner = output::create_spinner("Building page catalog...");
    let graph = build_page_graph()?;
    spinner.finish_and_clear();

    let mut open = 0usize;
    let mut losses = 0usize;
    let mut draws = 0usize;
    let mut transitions = 0usize;
    for page in graph.pages() {
        match page.outcome {
            Outcome::Open => open += 1,
            Outcome::Loss => losses += 1,
            Outcome::Draw => draws += 1,
        }
        transitions += page.transitions.len();
    }

    output::print_section("Catalog statistics");
    output::print_kv("Total pages", &graph.len().to_string());
    output::print_kv("Open pages", &open.to_string());
    output::print_kv("Loss pages", &losses.to_string());
    output::print_kv("Draw pages", &draws.to_string());
    output::print_kv("Transitions", &transitions.to_string());
    Ok(())
}
