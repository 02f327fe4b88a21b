//! Fixed-width reference table rendering and parsing

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    Result,
    board::Cell,
    builder::Outcome,
    error::Error,
    record::PageRecord,
    types::{CELLS, PageId},
};

/// Width of every column, in characters. Values are left-aligned and
/// padded; parsing slices rows at these offsets, so blank slots survive
/// the round trip.
pub const COLUMN_WIDTH: usize = 6;

/// The 21 column names: page id, the loss and draw markers, nine
/// destination-page slots, and nine square-content slots, both sets in
/// row-major order.
pub const COLUMNS: [&str; 21] = [
    "page", "loss", "draw", "p11", "p12", "p13", "p21", "p22", "p23", "p31", "p32", "p33", "c11",
    "c12", "c13", "c21", "c22", "c23", "c31", "c32", "c33",
];

const MARKER: &str = "*";

fn pad(field: &str) -> String {
    format!("{:<width$}", field, width = COLUMN_WIDTH)
}

/// The fixed header row naming all 21 columns.
pub fn header_row() -> String {
    let row: String = COLUMNS.iter().map(|name| pad(name)).collect();
    row.trim_end().to_string()
}

/// Render one record as a fixed-width data row.
pub fn render_row(record: &PageRecord) -> String {
    let mut fields: Vec<String> = Vec::with_capacity(COLUMNS.len());
    fields.push(record.id.to_string());
    fields.push(match record.outcome {
        Outcome::Loss => MARKER.to_string(),
        _ => String::new(),
    });
    fields.push(match record.outcome {
        Outcome::Draw => MARKER.to_string(),
        _ => String::new(),
    });

    let mut targets = vec![String::new(); CELLS];
    for (pos, target) in &record.transitions {
        targets[*pos] = target.to_string();
    }
    fields.extend(targets);

    for symbol in record.symbols {
        fields.push(symbol.to_string());
    }

    let row: String = fields.iter().map(|field| pad(field)).collect();
    row.trim_end().to_string()
}

/// Parse a data row back into a record.
///
/// # Errors
///
/// Returns [`Error::MalformedTableRow`] if the page number does not
/// parse, both markers are set, or a symbol slot holds anything other
/// than a single cell character.
pub fn parse_row(line: &str) -> Result<PageRecord> {
    let field = |index: usize| {
        line.get(index * COLUMN_WIDTH..(index + 1) * COLUMN_WIDTH)
            .unwrap_or_else(|| line.get(index * COLUMN_WIDTH..).unwrap_or(""))
            .trim()
    };
    let malformed = |message: String| Error::MalformedTableRow { message };

    let id: u32 = field(0)
        .parse()
        .map_err(|_| malformed(format!("bad page number '{}'", field(0))))?;

    let loss = field(1) == MARKER;
    let draw = field(2) == MARKER;
    let outcome = match (loss, draw) {
        (true, true) => {
            return Err(malformed(format!(
                "page {id} is marked both loss and draw"
            )));
        }
        (true, false) => Outcome::Loss,
        (false, true) => Outcome::Draw,
        (false, false) => Outcome::Open,
    };

    let mut transitions = Vec::new();
    for pos in 0..CELLS {
        let slot = field(3 + pos);
        if slot.is_empty() {
            continue;
        }
        let target: u32 = slot
            .parse()
            .map_err(|_| malformed(format!("bad destination '{slot}' for square {pos}")))?;
        transitions.push((pos, PageId::new(target)));
    }

    let mut symbols = ['.'; CELLS];
    for pos in 0..CELLS {
        let slot = field(12 + pos);
        let mut chars = slot.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) if Cell::from_char(c).is_some() => c,
            _ => {
                return Err(malformed(format!(
                    "bad symbol '{slot}' for square {pos}"
                )));
            }
        };
        symbols[pos] = symbol;
    }

    Ok(PageRecord {
        id: PageId::new(id),
        symbols,
        outcome,
        transitions,
    })
}

/// Render the header plus one row per record.
pub fn render_table(records: &[PageRecord]) -> String {
    let mut out = String::new();
    out.push_str(&header_row());
    out.push('\n');
    for record in records {
        out.push_str(&render_row(record));
        out.push('\n');
    }
    out
}

/// Write the table artifact.
///
/// # Errors
///
/// Any write failure is fatal: a partial table is not a valid artifact.
pub fn write_table(records: &[PageRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_table(records).as_bytes())
        .map_err(|e| Error::io(format!("write {}", path.display()), e))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("flush {}", path.display()), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<PageRecord> {
        vec![
            PageRecord {
                id: PageId::new(1),
                symbols: ['.'; 9],
                outcome: Outcome::Open,
                transitions: (0..9).map(|pos| (pos, PageId::new(pos as u32 + 2))).collect(),
            },
            PageRecord {
                id: PageId::new(42),
                symbols: ['X', 'O', 'X', 'O', 'O', 'X', 'X', '.', 'O'],
                outcome: Outcome::Loss,
                transitions: Vec::new(),
            },
            PageRecord {
                id: PageId::new(77),
                symbols: ['X', 'O', 'X', 'X', 'O', 'O', 'O', 'X', 'X'],
                outcome: Outcome::Draw,
                transitions: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_header_names_21_columns() {
        let header = header_row();
        assert_eq!(header.split_whitespace().count(), 21);
        assert!(header.starts_with("page"));
        assert!(header.contains("p33"));
        assert!(header.ends_with("c33"));
    }

    #[test]
    fn test_rows_round_trip() {
        for record in sample_records() {
            let parsed = parse_row(&render_row(&record)).unwrap();
            assert_eq!(parsed, record);
        }
    }

    #[test]
    fn test_markers_land_in_their_columns() {
        let records = sample_records();
        let loss_row = render_row(&records[1]);
        let draw_row = render_row(&records[2]);

        assert_eq!(&loss_row[COLUMN_WIDTH..COLUMN_WIDTH + 1], MARKER);
        assert_eq!(&draw_row[2 * COLUMN_WIDTH..2 * COLUMN_WIDTH + 1], MARKER);
        // The loss row's draw column is blank and vice versa.
        assert_eq!(loss_row[2 * COLUMN_WIDTH..3 * COLUMN_WIDTH].trim(), "");
        assert_eq!(draw_row[COLUMN_WIDTH..2 * COLUMN_WIDTH].trim(), "");
    }

    #[test]
    fn test_terminal_rows_have_blank_destination_slots() {
        let records = sample_records();
        let row = render_row(&records[1]);
        for index in 3..12 {
            let slot = row
                .get(index * COLUMN_WIDTH..(index + 1) * COLUMN_WIDTH)
                .unwrap_or("")
                .trim();
            assert!(slot.is_empty(), "slot {index} should be blank: '{slot}'");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_row("").is_err());
        assert!(parse_row("not-a-number").is_err());

        // Both markers set
        let row = render_row(&sample_records()[1]);
        let broken = format!(
            "{}{}{}",
            &row[..2 * COLUMN_WIDTH],
            pad(MARKER),
            &row[3 * COLUMN_WIDTH..]
        );
        assert!(parse_row(&broken).is_err());
    }

    #[test]
    fn test_table_has_header_plus_one_row_per_record() {
        let records = sample_records();
        let table = render_table(&records);
        assert_eq!(table.lines().count(), records.len() + 1);
        assert!(table.lines().next().unwrap().starts_with("page"));
    }
}
