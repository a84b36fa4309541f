//! Column definitions for the forcing, reach and result tables.
//!
//! Column names match the legacy data files so existing inputs can be read
//! unchanged. Units are carried for documentation and log messages.
//!
//! # Forcing table
//! - `date` - calendar day, `YYYY-MM-DD` or `YYYY/MM/DD`
//! - `precip_mm` - precipitation in mm/day
//! - `et_mm` - evapotranspiration in mm/day
//! - `tracer_upstream_mgL` - boundary tracer concentration entering reach A in mg/L
//!
//! # Reach table
//! - `reach_id` - optional explicit identifier (`A` or `B`)
//! - `area_km2` - catchment area in km2
//! - `tracer_init_mgL` - initial tracer concentration in mg/L
//!
//! # Result table
//! - `date`, `reach`, `q_m3s`, `c_mgL`

use reachmix_core::units::{AREA_UNITS, DISCHARGE_UNITS, RUNOFF_UNITS, TRACER_UNITS};

/// A named column with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

pub const COL_DATE: ColumnDefinition = ColumnDefinition {
    name: "date",
    unit: "",
    description: "Calendar day of the record",
};

pub const COL_PRECIPITATION: ColumnDefinition = ColumnDefinition {
    name: "precip_mm",
    unit: RUNOFF_UNITS,
    description: "Daily precipitation",
};

pub const COL_EVAPOTRANSPIRATION: ColumnDefinition = ColumnDefinition {
    name: "et_mm",
    unit: RUNOFF_UNITS,
    description: "Daily evapotranspiration",
};

pub const COL_UPSTREAM_TRACER: ColumnDefinition = ColumnDefinition {
    name: "tracer_upstream_mgL",
    unit: TRACER_UNITS,
    description: "Tracer concentration of the boundary inflow entering reach A",
};

pub const COL_REACH_ID: ColumnDefinition = ColumnDefinition {
    name: "reach_id",
    unit: "",
    description: "Explicit reach identifier (A or B)",
};

pub const COL_AREA: ColumnDefinition = ColumnDefinition {
    name: "area_km2",
    unit: AREA_UNITS,
    description: "Contributing catchment area",
};

pub const COL_TRACER_INIT: ColumnDefinition = ColumnDefinition {
    name: "tracer_init_mgL",
    unit: TRACER_UNITS,
    description: "Tracer concentration at the start of the run",
};

pub const COL_REACH: ColumnDefinition = ColumnDefinition {
    name: "reach",
    unit: "",
    description: "Reach the result belongs to",
};

pub const COL_DISCHARGE: ColumnDefinition = ColumnDefinition {
    name: "q_m3s",
    unit: DISCHARGE_UNITS,
    description: "Reach discharge",
};

pub const COL_CONCENTRATION: ColumnDefinition = ColumnDefinition {
    name: "c_mgL",
    unit: TRACER_UNITS,
    description: "Flow-weighted tracer concentration, NaN when undefined",
};

/// Header of the result table, in output order.
pub const RESULT_COLUMNS: [ColumnDefinition; 4] =
    [COL_DATE, COL_REACH, COL_DISCHARGE, COL_CONCENTRATION];
