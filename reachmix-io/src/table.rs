//! Generic tabular record reader.
//!
//! Every input table is read the same way: a header row naming the columns,
//! then one record per line. Each record is exposed as a mapping from column
//! name to the raw text value, so decoding into typed records stays separate
//! from the file format.

use crate::errors::{IoError, IoResult};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One record of a table: column name to raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    line: u64,
    fields: HashMap<String, String>,
}

impl TableRow {
    pub fn new(line: u64, fields: HashMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// Build a row from column/value pairs.
    pub fn from_pairs<'a>(
        line: u64,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self::new(
            line,
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    /// Line of the source the record was read from (the header is line 1).
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Value of a column. Missing columns and blank values are both `None`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Read a table from a file.
pub fn read_table(path: &Path) -> IoResult<Vec<TableRow>> {
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_table_from_reader(file, &path.display().to_string())
}

/// Read a table from any reader. `source_name` identifies the source in errors.
///
/// Column names and values are trimmed of surrounding whitespace. Every
/// record must have as many fields as the header.
pub fn read_table_from_reader<R: Read>(reader: R, source_name: &str) -> IoResult<Vec<TableRow>> {
    let csv_error = |source: csv::Error| IoError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        rows.push(TableRow::new(line, fields));
    }

    debug!(source = source_name, rows = rows.len(), "read table");
    Ok(rows)
}
