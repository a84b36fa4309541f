//! Simulation output records.

use crate::reach::ReachId;
use crate::FloatValue;
use chrono::NaiveDate;

/// Discharge and tracer concentration of one reach for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRecord {
    pub date: NaiveDate,
    pub reach: ReachId,
    /// unit: m3/s
    pub discharge_m3s: FloatValue,
    /// unit: mg/L, NaN when the reach had no inflow
    pub concentration_mg_l: FloatValue,
}

impl ResultRecord {
    /// True when the concentration could not be defined because the reach had no inflow.
    pub fn has_undefined_concentration(&self) -> bool {
        self.concentration_mg_l.is_nan()
    }
}

/// Ordered output of a run: for each timestep, reach A then reach B.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationOutput {
    records: Vec<ResultRecord>,
}

impl SimulationOutput {
    pub fn with_capacity(timesteps: usize) -> Self {
        Self {
            records: Vec::with_capacity(timesteps * ReachId::ALL.len()),
        }
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ResultRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of simulated timesteps.
    pub fn timesteps(&self) -> usize {
        self.records.len() / ReachId::ALL.len()
    }

    /// Records for a single reach, in timestep order.
    pub fn for_reach(&self, reach: ReachId) -> impl Iterator<Item = &ResultRecord> {
        self.records.iter().filter(move |r| r.reach == reach)
    }

    /// Number of records whose concentration is undefined (NaN).
    pub fn undefined_concentrations(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.has_undefined_concentration())
            .count()
    }
}

impl IntoIterator for SimulationOutput {
    type Item = ResultRecord;
    type IntoIter = std::vec::IntoIter<ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, reach: ReachId, c: FloatValue) -> ResultRecord {
        ResultRecord {
            date: NaiveDate::from_ymd_opt(2021, 6, day).unwrap(),
            reach,
            discharge_m3s: 1.0,
            concentration_mg_l: c,
        }
    }

    #[test]
    fn output_counts() {
        let mut output = SimulationOutput::with_capacity(2);
        assert!(output.is_empty());
        output.extend([record(1, ReachId::A, 1.0), record(1, ReachId::B, FloatValue::NAN)]);
        output.extend([record(2, ReachId::A, FloatValue::NAN), record(2, ReachId::B, 2.0)]);

        assert_eq!(output.len(), 4);
        assert_eq!(output.timesteps(), 2);
        assert_eq!(output.undefined_concentrations(), 2);
    }

    #[test]
    fn for_reach_keeps_order() {
        let mut output = SimulationOutput::default();
        output.extend([
            record(1, ReachId::A, 1.0),
            record(1, ReachId::B, 2.0),
            record(2, ReachId::A, 3.0),
            record(2, ReachId::B, 4.0),
        ]);
        let b: Vec<FloatValue> = output
            .for_reach(ReachId::B)
            .map(|r| r.concentration_mg_l)
            .collect();
        assert_eq!(b, vec![2.0, 4.0]);
    }
}
