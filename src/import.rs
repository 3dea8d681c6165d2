// Spreadsheet import: builds raw records from CSV rows
//
// The importer is a producer like any scraper: it fills in whatever the
// source had and nothing more. Validation and normalization stay with the
// record pipeline, so a malformed cell lands in the record as-is and is
// dealt with downstream.

use crate::record::ResourceRecord;
use crate::value::RawValue;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One CSV row, keyed by header. Known columns map to record fields; any
/// column not claimed below is captured into the flag map, which is how
/// boolean-like columns such as `is_icath` or `sliding_scale` flow into
/// the record.
type RecordRow = HashMap<String, String>;

/// Load raw records from a CSV file with a header row.
pub fn load_csv(path: &Path) -> Result<Vec<ResourceRecord>> {
    let rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file {}", path.display()))?;

    let records = read_rows(rdr)?;
    debug!(count = records.len(), path = %path.display(), "Loaded records from CSV");
    Ok(records)
}

/// Load raw records from any CSV source with a header row.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<Vec<ResourceRecord>> {
    read_rows(csv::Reader::from_reader(reader))
}

fn read_rows<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<ResourceRecord>> {
    let mut records = Vec::new();

    for row in rdr.deserialize() {
        let row: RecordRow = row.context("Failed to deserialize record row")?;
        records.push(record_from_row(row));
    }

    Ok(records)
}

// A blank cell means the column was not supplied for this row
fn take(row: &mut RecordRow, column: &str) -> Option<String> {
    row.remove(column).filter(|cell| !cell.trim().is_empty())
}

fn record_from_row(mut row: RecordRow) -> ResourceRecord {
    let record = ResourceRecord {
        name: take(&mut row, "name"),
        organization: take(&mut row, "organization"),
        description: take(&mut row, "description"),
        address: take(&mut row, "address"),
        street: take(&mut row, "street"),
        city: take(&mut row, "city"),
        state: take(&mut row, "state"),
        country: take(&mut row, "country"),
        zipcode: take(&mut row, "zipcode"),
        email: take(&mut row, "email"),
        phone: take(&mut row, "phone"),
        fax: take(&mut row, "fax"),
        url: take(&mut row, "url"),
        source: take(&mut row, "source"),
        notes: take(&mut row, "notes"),
        category_name: take(&mut row, "category_name"),
        category_names: Vec::new(),
        population_names: take(&mut row, "population_names"),
        population_tags: Vec::new(),
        procedure_type: take(&mut row, "procedure_type"),
        hours: take(&mut row, "hours"),
        npi: take(&mut row, "npi"),
        visible: match take(&mut row, "visible") {
            Some(raw) => RawValue::Text(raw),
            None => RawValue::Bool(true),
        },
        date_verified: take(&mut row, "date_verified"),
        flags: HashMap::new(),
    };

    // Everything left over is an extension flag column
    let flags = row
        .into_iter()
        .filter(|(_, cell)| !cell.trim().is_empty())
        .map(|(column, cell)| (column, RawValue::Text(cell)))
        .collect();

    ResourceRecord { flags, ..record }
}

// ============================================================================
// TESTS
// ============================================================================
