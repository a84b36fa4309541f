//! Two-reach routing engine.
//!
//! Reach A is upstream. Its discharge is its own local runoff, and its tracer
//! concentration is set by mixing a boundary inflow with that runoff. Reach B
//! is downstream and receives all of A's discharge on top of its own local
//! runoff.
//!
//! # Algorithm
//!
//! For each forcing record, in the order given:
//!
//! 1. $R = \max(P - ET, 0) + B$ (shared by both reaches)
//! 2. $Q_A = R \cdot A_A / 86.4$
//! 3. $C_A \leftarrow mix(w, C_{in}, Q_A, C_A)$ where $w$ is [`BOUNDARY_INFLOW_WEIGHT`]
//! 4. $Q_{B,local} = R \cdot A_B / 86.4$
//! 5. $Q_B = Q_{B,local} + Q_A$
//! 6. $C_B \leftarrow mix(Q_A, C_A, Q_{B,local}, C_B)$
//!
//! Reach A is fully resolved before reach B reads it. Routing is
//! instantaneous: no discharge is carried from one day to the next, only the
//! tracer concentrations persist.

use crate::errors::{ReachMixError, ReachMixResult};
use crate::forcing::{check_order, validate_series, ForcingRecord};
use crate::reach::{ReachId, ReachParameters, ReachState};
use crate::results::{ResultRecord, SimulationOutput};
use crate::runoff::RunoffModel;
use crate::units::to_discharge;
use crate::FloatValue;
use chrono::NaiveDate;
use tracing::{debug, trace};

/// Mixing weight of the boundary tracer source entering reach A.
///
/// This only weights the boundary concentration against A's local runoff. It
/// does not add to A's discharge.
pub const BOUNDARY_INFLOW_WEIGHT: FloatValue = 1.0;

/// Lifecycle of a [`RoutingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    NotStarted,
    Running,
    Done,
}

/// Owns both reach states and advances them one day at a time.
#[derive(Debug, Clone)]
pub struct RoutingEngine {
    reach_a: ReachState,
    reach_b: ReachState,
    runoff: RunoffModel,
    status: EngineStatus,
    last_date: Option<NaiveDate>,
    steps: usize,
}

impl RoutingEngine {
    /// Create an engine from validated reach and runoff parameters.
    pub fn new(
        reach_a: &ReachParameters,
        reach_b: &ReachParameters,
        runoff: RunoffModel,
    ) -> ReachMixResult<Self> {
        reach_a.validate(ReachId::A)?;
        reach_b.validate(ReachId::B)?;
        runoff.parameters().validate()?;

        Ok(Self {
            reach_a: ReachState::from_parameters(ReachId::A, reach_a),
            reach_b: ReachState::from_parameters(ReachId::B, reach_b),
            runoff,
            status: EngineStatus::NotStarted,
            last_date: None,
            steps: 0,
        })
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn reach(&self, id: ReachId) -> &ReachState {
        match id {
            ReachId::A => &self.reach_a,
            ReachId::B => &self.reach_b,
        }
    }

    /// Advance both reaches by one day.
    ///
    /// The record is checked before any state changes: an invalid value or a
    /// date earlier than the previous step leaves the engine untouched.
    ///
    /// Returns the records for reach A and reach B, in that order.
    pub fn step(&mut self, forcing: &ForcingRecord) -> ReachMixResult<[ResultRecord; 2]> {
        if self.status == EngineStatus::Done {
            return Err(ReachMixError::Configuration(
                "routing engine has already finished its run".to_string(),
            ));
        }
        forcing.validate()?;
        check_order(self.steps, forcing.date, self.last_date)?;

        self.status = EngineStatus::Running;

        let runoff_mm = self
            .runoff
            .runoff(forcing.precipitation_mm, forcing.evapotranspiration_mm);

        let q_a = to_discharge(runoff_mm, self.reach_a.area_km2());
        let c_a = self.reach_a.receive(
            BOUNDARY_INFLOW_WEIGHT,
            forcing.upstream_tracer_mg_l,
            q_a,
        );

        let q_b_local = to_discharge(runoff_mm, self.reach_b.area_km2());
        let q_b = q_b_local + q_a;
        let c_b = self.reach_b.receive(q_a, c_a, q_b_local);

        trace!(
            date = %forcing.date,
            runoff_mm,
            q_a,
            c_a,
            q_b,
            c_b,
            "routed timestep"
        );

        self.last_date = Some(forcing.date);
        self.steps += 1;

        Ok([
            ResultRecord {
                date: forcing.date,
                reach: self.reach_a.id(),
                discharge_m3s: q_a,
                concentration_mg_l: c_a,
            },
            ResultRecord {
                date: forcing.date,
                reach: self.reach_b.id(),
                discharge_m3s: q_b,
                concentration_mg_l: c_b,
            },
        ])
    }

    /// Run the whole forcing series.
    ///
    /// The series is validated up front so that a bad record aborts the run
    /// before any timestep is simulated.
    pub fn run(mut self, forcing: &[ForcingRecord]) -> ReachMixResult<SimulationOutput> {
        validate_series(forcing)?;
        debug!(timesteps = forcing.len(), "routing forcing series");

        let mut output = SimulationOutput::with_capacity(forcing.len());
        for record in forcing {
            output.extend(self.step(record)?);
        }
        self.status = EngineStatus::Done;

        debug!(
            records = output.len(),
            undefined = output.undefined_concentrations(),
            "routing finished"
        );
        Ok(output)
    }

    /// Mark the run as finished. Further calls to [`RoutingEngine::step`] fail.
    pub fn finish(&mut self) {
        self.status = EngineStatus::Done;
    }
}

/// Route a forcing series through reaches A and B.
pub fn simulate(
    reach_a: &ReachParameters,
    reach_b: &ReachParameters,
    runoff: RunoffModel,
    forcing: &[ForcingRecord],
) -> ReachMixResult<SimulationOutput> {
    RoutingEngine::new(reach_a, reach_b, runoff)?.run(forcing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runoff::RunoffParameters;
    use is_close::is_close;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, d).unwrap()
    }

    fn engine() -> RoutingEngine {
        RoutingEngine::new(
            &ReachParameters::new(1.0, 0.0),
            &ReachParameters::new(2.0, 0.0),
            RunoffModel::new(),
        )
        .unwrap()
    }

    #[test]
    fn single_step_matches_hand_calculation() {
        let mut engine = engine();
        let [a, b] = engine
            .step(&ForcingRecord::new(day(1), 10.0, 2.0, 5.0))
            .unwrap();

        let q_a = 8.0 / 86.4;
        let c_a = 5.0 / (1.0 + q_a);
        let q_b_local = 16.0 / 86.4;
        let c_b = q_a * c_a / (q_a + q_b_local);

        assert_eq!(a.reach, ReachId::A);
        assert!(is_close!(a.discharge_m3s, q_a));
        assert!(is_close!(a.concentration_mg_l, c_a));

        assert_eq!(b.reach, ReachId::B);
        assert!(is_close!(b.discharge_m3s, q_a + q_b_local));
        assert!(is_close!(b.concentration_mg_l, c_b));
    }

    #[test]
    fn status_transitions() {
        let mut engine = engine();
        assert_eq!(engine.status(), EngineStatus::NotStarted);
        engine
            .step(&ForcingRecord::new(day(1), 1.0, 0.0, 0.0))
            .unwrap();
        assert_eq!(engine.status(), EngineStatus::Running);
        engine.finish();
        assert_eq!(engine.status(), EngineStatus::Done);
        assert!(engine
            .step(&ForcingRecord::new(day(2), 1.0, 0.0, 0.0))
            .is_err());
    }

    #[test]
    fn rejected_step_leaves_state_untouched() {
        let mut engine = engine();
        engine
            .step(&ForcingRecord::new(day(5), 10.0, 0.0, 5.0))
            .unwrap();
        let before = engine.clone();

        let result = engine.step(&ForcingRecord::new(day(4), 10.0, 0.0, 5.0));
        assert!(matches!(
            result,
            Err(ReachMixError::ForcingOutOfOrder { index: 1, .. })
        ));
        assert_eq!(engine.reach(ReachId::A), before.reach(ReachId::A));
        assert_eq!(engine.reach(ReachId::B), before.reach(ReachId::B));
    }

    #[test]
    fn dry_day_a_takes_boundary_concentration() {
        let mut engine = engine();
        let [a, b] = engine
            .step(&ForcingRecord::new(day(1), 0.0, 4.0, 7.0))
            .unwrap();
        assert_eq!(a.discharge_m3s, 0.0);
        assert_eq!(a.concentration_mg_l, 7.0);
        assert_eq!(b.discharge_m3s, 0.0);
        assert!(b.has_undefined_concentration());
    }

    #[test]
    fn zero_area_upstream_reach() {
        let mut engine = RoutingEngine::new(
            &ReachParameters::new(0.0, 1.0),
            &ReachParameters::new(3.0, 2.0),
            RunoffModel::new(),
        )
        .unwrap();
        let [a, b] = engine
            .step(&ForcingRecord::new(day(1), 9.0, 0.0, 4.0))
            .unwrap();
        assert_eq!(a.discharge_m3s, 0.0);
        assert_eq!(a.concentration_mg_l, 4.0);
        assert!(is_close!(b.discharge_m3s, 27.0 / 86.4));
        assert!(is_close!(b.concentration_mg_l, 2.0));
    }

    #[test]
    fn baseflow_keeps_water_moving_on_dry_days() {
        let runoff = RunoffModel::from_parameters(RunoffParameters {
            baseflow_mm_per_day: 0.864,
        });
        let output = simulate(
            &ReachParameters::new(10.0, 0.0),
            &ReachParameters::new(10.0, 0.0),
            runoff,
            &[ForcingRecord::new(day(1), 0.0, 5.0, 1.0)],
        )
        .unwrap();
        let records = output.records();
        assert!(is_close!(records[0].discharge_m3s, 0.1));
        assert!(is_close!(records[1].discharge_m3s, 0.2));
        assert!(!records[1].has_undefined_concentration());
    }

    #[test]
    fn run_rejects_invalid_series_before_simulating() {
        let forcing = [
            ForcingRecord::new(day(1), 1.0, 0.0, 0.0),
            ForcingRecord::new(day(2), -3.0, 0.0, 0.0),
        ];
        assert!(engine().run(&forcing).is_err());
    }

    #[test]
    fn new_rejects_invalid_parameters() {
        let result = RoutingEngine::new(
            &ReachParameters::new(1.0, 0.0),
            &ReachParameters::new(-1.0, 0.0),
            RunoffModel::new(),
        );
        assert!(matches!(
            result,
            Err(ReachMixError::InvalidParameter { .. })
        ));
    }
}
