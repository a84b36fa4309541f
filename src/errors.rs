use reachmix_core::ReachMixError;
use reachmix_io::IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for a complete run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config in {origin}: {source}")]
    ConfigParse {
        origin: String,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Model(#[from] ReachMixError),
}

/// Convenience type for `Result<T, RunError>`.
pub type RunResult<T> = Result<T, RunError>;
