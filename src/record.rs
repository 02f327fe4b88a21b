//! Structured per-page records handed to the rendering collaborators

use serde::{Deserialize, Serialize};

use crate::{
    builder::{Outcome, PageGraph},
    types::{CELLS, PageId},
};

/// Everything a renderer needs to reproduce one page.
///
/// Symbol selection happens here (`X`, `O`, `.` for an empty square);
/// renderers do their own layout but never re-derive square contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: PageId,
    /// Square contents in row-major order.
    pub symbols: [char; CELLS],
    pub outcome: Outcome,
    /// (square, destination page) pairs in row-major square order.
    pub transitions: Vec<(usize, PageId)>,
}

/// Flatten a finished graph into records in ascending page order.
pub fn emit_records(graph: &PageGraph) -> Vec<PageRecord> {
    graph
        .pages()
        .map(|page| PageRecord {
            id: page.id,
            symbols: page.board.symbols(),
            outcome: page.outcome,
            transitions: page.transitions.clone(),
        })
        .collect()
}
