//! Daily runoff generation.
//!
//! Runoff is the part of the day's precipitation that is not returned to the
//! atmosphere, plus an optional constant baseflow contribution:
//!
//! $$ R = \max(P - ET, 0) + B $$
//!
//! The baseflow term is a placeholder for groundwater contribution. It is a
//! fixed depth per day with no storage or recession behind it. It defaults to
//! zero, in which case runoff is purely the effective rainfall.

use crate::errors::{ensure_non_negative, ReachMixResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the runoff model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunoffParameters {
    /// Constant baseflow depth added to every day's runoff.
    ///
    /// unit: mm/day
    ///
    /// Default: 0.0
    pub baseflow_mm_per_day: FloatValue,
}

impl Default for RunoffParameters {
    fn default() -> Self {
        Self {
            baseflow_mm_per_day: 0.0,
        }
    }
}

impl RunoffParameters {
    pub fn validate(&self) -> ReachMixResult<()> {
        ensure_non_negative("baseflow_mm_per_day", self.baseflow_mm_per_day)
    }
}

/// Precipitation in excess of evapotranspiration (mm/day), never negative.
pub fn effective_rainfall(
    precipitation_mm: FloatValue,
    evapotranspiration_mm: FloatValue,
) -> FloatValue {
    (precipitation_mm - evapotranspiration_mm).max(0.0)
}

/// Runoff model shared by both reaches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunoffModel {
    parameters: RunoffParameters,
}

impl RunoffModel {
    /// Create a runoff model with no baseflow.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parameters(parameters: RunoffParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &RunoffParameters {
        &self.parameters
    }

    /// Runoff depth for one day (mm/day).
    pub fn runoff(
        &self,
        precipitation_mm: FloatValue,
        evapotranspiration_mm: FloatValue,
    ) -> FloatValue {
        effective_rainfall(precipitation_mm, evapotranspiration_mm)
            + self.parameters.baseflow_mm_per_day
    }
}
