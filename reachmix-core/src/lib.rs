//! Core engine for routing daily runoff and tracer through two connected reaches.
//!
//! # Module Organisation
//!
//! - `units`: runoff depth to discharge conversion
//! - `mixing`: flow-weighted tracer mixing
//! - `runoff`: daily runoff generation
//! - `reach`: reach identity, parameters and mutable state
//! - `forcing`: daily forcing records and series validation
//! - `engine`: the per-timestep A then B routing recurrence
//! - `results`: output records
//!
//! Reading and writing tabular data lives in the `reachmix-io` crate.

pub mod engine;
pub mod errors;
pub mod forcing;
pub mod mixing;
pub mod reach;
pub mod results;
pub mod runoff;
pub mod units;

/// Floating point type used for all physical quantities.
pub type FloatValue = f64;

pub use engine::{simulate, EngineStatus, RoutingEngine, BOUNDARY_INFLOW_WEIGHT};
pub use errors::{ReachMixError, ReachMixResult};
pub use forcing::ForcingRecord;
pub use reach::{ReachId, ReachParameters, ReachState};
pub use results::{ResultRecord, SimulationOutput};
pub use runoff::{RunoffModel, RunoffParameters};
