//! Daily forcing records.

use crate::errors::{ensure_non_negative, ReachMixError, ReachMixResult};
use crate::FloatValue;
use chrono::NaiveDate;

/// Forcing for a single day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcingRecord {
    pub date: NaiveDate,
    /// unit: mm/day
    pub precipitation_mm: FloatValue,
    /// unit: mm/day
    pub evapotranspiration_mm: FloatValue,
    /// Tracer concentration of the boundary inflow entering reach A
    /// unit: mg/L
    pub upstream_tracer_mg_l: FloatValue,
}

impl ForcingRecord {
    pub fn new(
        date: NaiveDate,
        precipitation_mm: FloatValue,
        evapotranspiration_mm: FloatValue,
        upstream_tracer_mg_l: FloatValue,
    ) -> Self {
        Self {
            date,
            precipitation_mm,
            evapotranspiration_mm,
            upstream_tracer_mg_l,
        }
    }

    /// Check that all values are finite and non-negative.
    pub fn validate(&self) -> ReachMixResult<()> {
        let fields = [
            ("precipitation", self.precipitation_mm),
            ("evapotranspiration", self.evapotranspiration_mm),
            ("upstream tracer concentration", self.upstream_tracer_mg_l),
        ];
        for (name, value) in fields {
            ensure_non_negative(&format!("{name} on {}", self.date), value)?;
        }
        Ok(())
    }
}

/// Validate a forcing series before it is simulated.
///
/// Each record must hold valid values and dates must not decrease. Records
/// are simulated in the order given, so the series is never sorted here.
pub fn validate_series(records: &[ForcingRecord]) -> ReachMixResult<()> {
    let mut previous: Option<NaiveDate> = None;
    for (index, record) in records.iter().enumerate() {
        record.validate()?;
        check_order(index, record.date, previous)?;
        previous = Some(record.date);
    }
    Ok(())
}

/// Check that `date` does not precede the date of the previous record.
///
/// `index` is the zero-based position of the record in its series.
pub fn check_order(
    index: usize,
    date: NaiveDate,
    previous: Option<NaiveDate>,
) -> ReachMixResult<()> {
    match previous {
        Some(previous) if date < previous => Err(ReachMixError::ForcingOutOfOrder {
            index,
            date,
            previous,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    #[test]
    fn valid_series() {
        let records = vec![
            ForcingRecord::new(day(1), 10.0, 2.0, 5.0),
            ForcingRecord::new(day(2), 0.0, 3.0, 5.0),
            ForcingRecord::new(day(2), 1.0, 0.0, 0.0),
            ForcingRecord::new(day(4), 0.0, 0.0, 0.0),
        ];
        assert!(validate_series(&records).is_ok());
    }

    #[test]
    fn empty_series_is_valid() {
        assert!(validate_series(&[]).is_ok());
    }

    #[test]
    fn rejects_out_of_order() {
        let records = vec![
            ForcingRecord::new(day(1), 1.0, 0.0, 0.0),
            ForcingRecord::new(day(3), 1.0, 0.0, 0.0),
            ForcingRecord::new(day(2), 1.0, 0.0, 0.0),
        ];
        let err = validate_series(&records).unwrap_err();
        assert_eq!(
            err,
            ReachMixError::ForcingOutOfOrder {
                index: 2,
                date: day(2),
                previous: day(3),
            }
        );
    }

    #[test]
    fn rejects_negative_precipitation() {
        let records = vec![ForcingRecord::new(day(1), -1.0, 0.0, 0.0)];
        let err = validate_series(&records).unwrap_err();
        assert!(err.to_string().contains("precipitation on 2020-01-01"));
    }

    #[test]
    fn rejects_nan_values() {
        let record = ForcingRecord::new(day(1), 1.0, FloatValue::NAN, 0.0);
        assert!(record.validate().is_err());
        let record = ForcingRecord::new(day(1), 1.0, 0.0, FloatValue::NAN);
        assert!(record.validate().is_err());
    }
}
