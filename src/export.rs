//! Machine-readable exports of the page records

use std::{fs::File, io::BufWriter, path::Path};

use serde::Serialize;

use crate::{
    Result,
    error::Error,
    record::PageRecord,
    types::{CELLS, col, row},
};

/// JSON export shape: a catalog object wrapping the full record list.
#[derive(Serialize)]
struct Catalog<'a> {
    total_pages: usize,
    pages: &'a [PageRecord],
}

/// Write the records as CSV: page, outcome, board string, then one
/// destination column per square in row-major order (blank where no
/// transition exists).
pub fn write_csv(records: &[PageRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec![
        "page".to_string(),
        "outcome".to_string(),
        "board".to_string(),
    ];
    for pos in 0..CELLS {
        header.push(format!("p{}{}", row(pos) + 1, col(pos) + 1));
    }
    writer.write_record(&header)?;

    for record in records {
        let mut fields = vec![
            record.id.to_string(),
            record.outcome.to_string(),
            record.symbols.iter().collect::<String>(),
        ];
        let mut targets = vec![String::new(); CELLS];
        for (pos, target) in &record.transitions {
            targets[*pos] = target.to_string();
        }
        fields.extend(targets);
        writer.write_record(&fields)?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("flush {}", path.display()), e))?;
    Ok(())
}

/// Write the records as a pretty-printed JSON catalog.
pub fn write_json(records: &[PageRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let writer = BufWriter::new(file);
    let catalog = Catalog {
        total_pages: records.len(),
        pages: records,
    };
    serde_json::to_writer_pretty(writer, &catalog)?;
    Ok(())
}
