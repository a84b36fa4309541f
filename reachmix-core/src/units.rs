//! Conversion from runoff depth to volumetric discharge.
//!
//! Runoff is produced as a depth of water per day (mm/day) spread over a
//! catchment area (km²). Routing works in discharge (m³/s).
//!
//! 1 mm of water over 1 km² is 1000 m³. Spread over the 86 400 seconds of a
//! day this gives
//!
//! $$ 1\ \mathrm{mm/day \cdot km^2} = \frac{1000}{86400}\ \mathrm{m^3/s} = \frac{1}{86.4}\ \mathrm{m^3/s} $$

use crate::FloatValue;

/// Runoff rate (mm/day over 1 km²) that produces a discharge of exactly 1 m³/s.
pub const MM_DAY_KM2_PER_M3_S: FloatValue = 86.4;

pub const RUNOFF_UNITS: &str = "mm/day";
pub const AREA_UNITS: &str = "km2";
pub const DISCHARGE_UNITS: &str = "m3/s";
pub const TRACER_UNITS: &str = "mg/L";

/// Convert a runoff rate over a catchment area into a discharge.
///
/// The rate is expected to be non-negative (the runoff model never produces
/// negative runoff). A catchment with no contributing area produces no flow,
/// whatever the rate.
///
/// # Arguments
///
/// * `rate_mm_per_day` - Runoff depth rate (mm/day)
/// * `area_km2` - Contributing catchment area (km²)
///
/// # Returns
///
/// Discharge (m³/s)
pub fn to_discharge(rate_mm_per_day: FloatValue, area_km2: FloatValue) -> FloatValue {
    if area_km2 == 0.0 {
        return 0.0;
    }
    rate_mm_per_day * area_km2 / MM_DAY_KM2_PER_M3_S
}
