//! Result sinks.
//!
//! A sink consumes the ordered result records of a run. [`CsvSink`] writes
//! them as a table with the header `date,reach,q_m3s,c_mgL`; [`VecSink`]
//! keeps them in memory.
//!
//! Numbers are written in their shortest round-trip form, and undefined
//! concentrations as `NaN`, so identical runs produce identical files.

use crate::columns::RESULT_COLUMNS;
use crate::dates::format_date;
use crate::errors::{IoError, IoResult};
use reachmix_core::ResultRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Consumer of simulation results.
pub trait ResultSink {
    /// Accept one record. Records arrive in timestep order, reach A before reach B.
    fn write(&mut self, record: &ResultRecord) -> IoResult<()>;

    /// Flush any buffered output.
    fn finish(&mut self) -> IoResult<()> {
        Ok(())
    }

    /// Write every record then finish. Returns the number of records written.
    fn write_all(&mut self, records: &[ResultRecord]) -> IoResult<usize> {
        for record in records {
            self.write(record)?;
        }
        self.finish()?;
        Ok(records.len())
    }
}

/// In-memory sink.
#[derive(Debug, Clone, Default)]
pub struct VecSink {
    records: Vec<ResultRecord>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }
}

impl ResultSink for VecSink {
    fn write(&mut self, record: &ResultRecord) -> IoResult<()> {
        self.records.push(*record);
        Ok(())
    }
}

/// Tabular sink writing one row per record after a header row.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    name: String,
}

impl CsvSink<File> {
    /// Create (or truncate) the file at `path` and write the header.
    pub fn create(path: &Path) -> IoResult<Self> {
        let file = File::create(path).map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_writer(file, &path.display().to_string())
    }
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer and write the header.
    pub fn from_writer(writer: W, name: &str) -> IoResult<Self> {
        let mut sink = Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
            name: name.to_string(),
        };
        let header = RESULT_COLUMNS.map(|c| c.name);
        sink.writer
            .write_record(header)
            .map_err(|e| sink.csv_error(e))?;
        Ok(sink)
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> IoResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| IoError::Write(e.into_error()))
    }

    fn csv_error(&self, source: csv::Error) -> IoError {
        IoError::Csv {
            source_name: self.name.clone(),
            source,
        }
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn write(&mut self, record: &ResultRecord) -> IoResult<()> {
        let row = (
            format_date(record.date),
            record.reach.as_str(),
            record.discharge_m3s,
            record.concentration_mg_l,
        );
        self.writer.serialize(row).map_err(|e| self.csv_error(e))
    }

    fn finish(&mut self) -> IoResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Write results to a file, header first. Returns the number of records written.
pub fn write_results(path: &Path, records: &[ResultRecord]) -> IoResult<usize> {
    CsvSink::create(path)?.write_all(records)
}
