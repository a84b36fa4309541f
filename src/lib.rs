//! Two-reach daily runoff routing and flow-weighted tracer mixing.
//!
//! The simulation engine lives in [`reachmix_core`] and the table readers and
//! writers in [`reachmix_io`]. This crate ties them together with a TOML
//! configuration and the `reachmix` command line tool.

pub mod config;
pub mod errors;
pub mod pipeline;

pub use config::{PathOverrides, PathsConfig, RunConfig};
pub use errors::{RunError, RunResult};
pub use pipeline::{run, simulate_files, RunSummary};
