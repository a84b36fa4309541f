//! Reach identity, static parameters and per-timestep state.

use crate::errors::{ensure_non_negative, ReachMixResult};
use crate::mixing::mix;
use crate::FloatValue;
use std::fmt;

/// Identifier of one of the two reaches.
///
/// `A` is upstream and `B` is downstream, receiving all of A's discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReachId {
    A,
    B,
}

impl ReachId {
    /// Both reaches in routing order.
    pub const ALL: [ReachId; 2] = [ReachId::A, ReachId::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReachId::A => "A",
            ReachId::B => "B",
        }
    }

    /// Parse a reach label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            l if l.eq_ignore_ascii_case("a") => Some(ReachId::A),
            l if l.eq_ignore_ascii_case("b") => Some(ReachId::B),
            _ => None,
        }
    }
}

impl fmt::Display for ReachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static properties of a reach, loaded once before the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachParameters {
    /// Contributing catchment area
    /// unit: km2
    pub area_km2: FloatValue,
    /// Tracer concentration at the start of the run
    /// unit: mg/L
    pub initial_concentration_mg_l: FloatValue,
}

impl ReachParameters {
    pub fn new(area_km2: FloatValue, initial_concentration_mg_l: FloatValue) -> Self {
        Self {
            area_km2,
            initial_concentration_mg_l,
        }
    }

    /// Check that the area and the initial concentration are finite and non-negative.
    ///
    /// A zero area is accepted: such a reach produces no local runoff.
    pub fn validate(&self, id: ReachId) -> ReachMixResult<()> {
        ensure_non_negative(&format!("reach {id} area_km2"), self.area_km2)?;
        ensure_non_negative(
            &format!("reach {id} initial concentration"),
            self.initial_concentration_mg_l,
        )
    }
}

/// Mutable state of a reach during a run.
///
/// The area is fixed at construction. The tracer concentration is replaced
/// once per timestep by mixing the reach's inflow with its local runoff.
#[derive(Debug, Clone, PartialEq)]
pub struct ReachState {
    id: ReachId,
    area_km2: FloatValue,
    tracer_concentration_mg_l: FloatValue,
}

impl ReachState {
    pub fn from_parameters(id: ReachId, parameters: &ReachParameters) -> Self {
        Self {
            id,
            area_km2: parameters.area_km2,
            tracer_concentration_mg_l: parameters.initial_concentration_mg_l,
        }
    }

    pub fn id(&self) -> ReachId {
        self.id
    }

    pub fn area_km2(&self) -> FloatValue {
        self.area_km2
    }

    /// Current tracer concentration (mg/L). NaN once the reach has had no inflow.
    pub fn concentration_mg_l(&self) -> FloatValue {
        self.tracer_concentration_mg_l
    }

    /// Mix an inflow into the reach.
    ///
    /// The inflow (`inflow_q`, `inflow_c`) is combined with the local runoff
    /// `local_q`, which carries the reach's current concentration. The result
    /// becomes the new concentration and is returned.
    pub fn receive(
        &mut self,
        inflow_q: FloatValue,
        inflow_c: FloatValue,
        local_q: FloatValue,
    ) -> FloatValue {
        self.tracer_concentration_mg_l =
            mix(inflow_q, inflow_c, local_q, self.tracer_concentration_mg_l);
        self.tracer_concentration_mg_l
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn reach_id_parse() {
        assert_eq!(ReachId::parse("A"), Some(ReachId::A));
        assert_eq!(ReachId::parse(" b "), Some(ReachId::B));
        assert_eq!(ReachId::parse("C"), None);
        assert_eq!(ReachId::parse(""), None);
        assert_eq!(ReachId::A.to_string(), "A");
    }

    #[test]
    fn parameters_validation() {
        assert!(ReachParameters::new(1.0, 0.0).validate(ReachId::A).is_ok());
        assert!(ReachParameters::new(0.0, 0.0).validate(ReachId::A).is_ok());

        let err = ReachParameters::new(-2.0, 0.0)
            .validate(ReachId::B)
            .unwrap_err();
        assert!(err.to_string().contains("reach B area_km2"));

        assert!(ReachParameters::new(1.0, FloatValue::NAN)
            .validate(ReachId::A)
            .is_err());
    }

    #[test]
    fn state_from_parameters() {
        let state = ReachState::from_parameters(ReachId::B, &ReachParameters::new(2.0, 3.5));
        assert_eq!(state.id(), ReachId::B);
        assert_eq!(state.area_km2(), 2.0);
        assert_eq!(state.concentration_mg_l(), 3.5);
    }

    #[test]
    fn receive_updates_concentration() {
        let mut state = ReachState::from_parameters(ReachId::A, &ReachParameters::new(1.0, 0.0));
        let c = state.receive(1.0, 10.0, 3.0);
        assert!(is_close!(c, 2.5));
        assert_eq!(state.concentration_mg_l(), c);

        // Next mix uses the updated concentration for the local runoff
        let c = state.receive(1.0, 2.5, 1.0);
        assert!(is_close!(c, 2.5));
    }

    #[test]
    fn receive_without_flow_is_undefined() {
        let mut state = ReachState::from_parameters(ReachId::B, &ReachParameters::new(0.0, 1.0));
        assert!(state.receive(0.0, 4.0, 0.0).is_nan());
        assert!(state.concentration_mg_l().is_nan());
    }
}
