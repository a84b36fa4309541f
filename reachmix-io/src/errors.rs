use reachmix_core::ReachMixError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for reading and writing tabular data.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Date not recognized. Expected date format: YYYY-MM-DD or YYYY/MM/DD (e.g. 2020-12-31). Got: '{0}'")]
    DateFormat(String),
    #[error("Column '{column}' is not a number. Got: '{value}'")]
    InvalidNumber { column: String, value: String },
    #[error("{source_name}, line {line}: {error}")]
    InRecord {
        source_name: String,
        line: u64,
        #[source]
        error: Box<IoError>,
    },
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed table in {source_name}: {source}")]
    Csv {
        source_name: String,
        source: csv::Error,
    },
    #[error("Failed to write results: {0}")]
    Write(#[from] std::io::Error),
    #[error(transparent)]
    Model(#[from] ReachMixError),
}

impl IoError {
    /// Attach the source name and line of the offending record.
    pub fn in_record(self, source_name: &str, line: u64) -> Self {
        IoError::InRecord {
            source_name: source_name.to_string(),
            line,
            error: Box::new(self),
        }
    }

    /// The innermost error, skipping record context.
    pub fn root(&self) -> &IoError {
        match self {
            IoError::InRecord { error, .. } => error.root(),
            other => other,
        }
    }
}

/// Convenience type for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
