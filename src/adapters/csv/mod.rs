//! CSV decoding and encoding
//!
//! The loader owns malformed-input handling: the scanning core only ever
//! sees a successfully decoded [`Dataset`]. A header row names the columns;
//! empty fields become [`CellValue::Null`]; everything else is kept verbatim
//! as text so that literal formatting (and duplicate grouping on it)
//! survives the trip through the scanner.

use crate::domain::{CellValue, Column, Dataset, LedgerScanError, Result};
use std::io::{Read, Write};
use std::path::Path;

/// Load a dataset from a CSV file
pub fn load_path(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        LedgerScanError::Io(format!("Failed to open {}: {e}", path.display()))
    })?;
    load_reader(file)
}

/// Load a dataset from any CSV byte stream
///
/// Short rows are padded with nulls; rows longer than the header are
/// truncated to the named columns.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut columns: Vec<Column> = headers
        .iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in csv_reader.records() {
        let record = record?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let cell = match record.get(idx) {
                None => CellValue::Null,
                Some("") => CellValue::Null,
                Some(field) => CellValue::Text(field.to_string()),
            };
            column.cells.push(cell);
        }
    }

    tracing::debug!(
        columns = columns.len(),
        rows = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0),
        "Loaded CSV dataset"
    );

    Ok(Dataset::from_columns(columns))
}

/// Write a dataset to a CSV file
pub fn write_path(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| {
        LedgerScanError::Io(format!("Failed to create {}: {e}", path.display()))
    })?;
    write_writer(dataset, file)
}

/// Write a dataset as CSV to any writer
///
/// Null cells are written as empty fields.
pub fn write_writer<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(dataset.column_names())?;
    for row in 0..dataset.row_count() {
        let record: Vec<String> = dataset
            .columns()
            .iter()
            .map(|column| {
                column
                    .cells
                    .get(row)
                    .map(|cell| cell.to_string())
                    .unwrap_or_default()
            })
            .collect();
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;

    Ok(())
}
