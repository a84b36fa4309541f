//! Tabular input and output for reachmix.
//!
//! - `table`: one generic reader producing column to value maps
//! - `dates`: `YYYY-MM-DD` / `YYYY/MM/DD` parsing
//! - `decode`: typed forcing records and reach selection
//! - `sink`: result sinks, including the CSV writer
//! - `columns`: column names and units shared by all tables

pub mod columns;
pub mod dates;
pub mod decode;
pub mod errors;
pub mod sink;
pub mod table;

pub use decode::{decode_forcing_table, select_reaches, ReachPair};
pub use errors::{IoError, IoResult};
pub use sink::{write_results, CsvSink, ResultSink, VecSink};
pub use table::{read_table, TableRow};
