//! Reader-facing book rendering

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    Result,
    builder::Outcome,
    error::Error,
    record::PageRecord,
    types::{SIDE, col, row},
};

const DIVIDER_WIDTH: usize = 60;

/// Render one page as a book block: header, grid, then either the move
/// list or the terminal message.
pub fn render_page(record: &PageRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("Page {}\n\n", record.id));
    out.push_str(&render_grid(&record.symbols));
    out.push('\n');

    match record.outcome {
        Outcome::Open => {
            out.push_str("Mark a square with X, then turn to the page shown:\n");
            for (pos, target) in &record.transitions {
                out.push_str(&format!(
                    "  row {}, col {}  ->  page {}\n",
                    row(*pos) + 1,
                    col(*pos) + 1,
                    target
                ));
            }
        }
        Outcome::Loss => {
            out.push_str("Three O's in a row. The book wins this game.\n");
        }
        Outcome::Draw => {
            out.push_str("Every square is filled with no line made. A draw.\n");
        }
    }

    out
}

fn render_grid(symbols: &[char; 9]) -> String {
    let mut out = String::new();
    for r in 0..SIDE {
        out.push_str(&format!(
            " {} | {} | {}\n",
            symbols[SIDE * r],
            symbols[SIDE * r + 1],
            symbols[SIDE * r + 2]
        ));
        if r < SIDE - 1 {
            out.push_str("---+---+---\n");
        }
    }
    out
}

/// Concatenate all page blocks in ascending id order, separated by a
/// divider line.
pub fn render_book(records: &[PageRecord]) -> String {
    let divider = format!("\n{}\n\n", "=".repeat(DIVIDER_WIDTH));
    records
        .iter()
        .map(render_page)
        .collect::<Vec<_>>()
        .join(&divider)
}

/// Write the book artifact.
///
/// # Errors
///
/// Any write failure is fatal: a partial book is not a valid artifact.
pub fn write_book(records: &[PageRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_book(records).as_bytes())
        .map_err(|e| Error::io(format!("write {}", path.display()), e))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("flush {}", path.display()), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageId;

    fn open_record() -> PageRecord {
        PageRecord {
            id: PageId::new(7),
            symbols: ['X', '.', '.', '.', 'O', '.', '.', '.', '.'],
            outcome: Outcome::Open,
            transitions: vec![(1, PageId::new(12)), (2, PageId::new(13))],
        }
    }

    #[test]
    fn test_open_page_lists_moves() {
        let block = render_page(&open_record());
        assert!(block.starts_with("Page 7\n"));
        assert!(block.contains(" X | . | .\n"));
        assert!(block.contains(" . | O | .\n"));
        assert!(block.contains("row 1, col 2  ->  page 12"));
        assert!(block.contains("row 1, col 3  ->  page 13"));
    }

    #[test]
    fn test_terminal_pages_show_messages() {
        let mut record = open_record();
        record.outcome = Outcome::Loss;
        record.transitions.clear();
        let block = render_page(&record);
        assert!(block.contains("The book wins"));
        assert!(!block.contains("->"));

        record.outcome = Outcome::Draw;
        let block = render_page(&record);
        assert!(block.contains("A draw."));
    }

    #[test]
    fn test_book_joins_pages_with_divider() {
        let records = vec![open_record(), open_record()];
        let book = render_book(&records);
        assert_eq!(book.matches(&"=".repeat(DIVIDER_WIDTH)).count(), 1);
    }
}
