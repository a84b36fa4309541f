//! Flow-weighted tracer mixing.

use crate::FloatValue;

/// Mix two inflows and return the flow-weighted concentration.
///
/// $$ c = \frac{q_1 c_1 + q_2 c_2}{q_1 + q_2} $$
///
/// This conserves tracer mass. An inflow with zero discharge carries no mass,
/// so it drops out of the sum even when its concentration is undefined and the
/// result is the other inflow's concentration.
///
/// When the combined discharge is not positive there is no water to carry any
/// tracer and the concentration is undefined. This is reported as NaN rather
/// than zero so callers can detect it.
pub fn mix(q1: FloatValue, c1: FloatValue, q2: FloatValue, c2: FloatValue) -> FloatValue {
    let total = q1 + q2;
    // Also catches NaN discharges
    if !(total > 0.0) {
        return FloatValue::NAN;
    }
    (tracer_load(q1, c1) + tracer_load(q2, c2)) / total
}

/// Tracer load carried by an inflow (mg/L · m³/s).
fn tracer_load(q: FloatValue, c: FloatValue) -> FloatValue {
    if q == 0.0 {
        0.0
    } else {
        q * c
    }
}
