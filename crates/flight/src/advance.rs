//! Per-tick flight state advancement with closed-form kinematics.

use crate::{FlightPhase, FlightState};

/// What a single advancement tick reported back to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    InProgress,
    Arrived,
}

/// Advance a flight by one tick of `dt_seconds`.
///
/// Every branch is closed-form in elapsed time, so a tick costs O(1)
/// no matter how long the flight is, and identical state plus identical
/// tick sequence reproduces bit-for-bit. Advancing a completed flight
/// is a no-op that keeps reporting [`TickOutcome::Arrived`].
pub fn advance(state: &mut FlightState, dt_seconds: f64) -> TickOutcome {
    if state.phase == FlightPhase::Complete {
        return TickOutcome::Arrived;
    }

    state.elapsed_time_s += dt_seconds;

    if state.elapsed_time_s >= state.total_time_s {
        state.distance_covered_m = state.total_distance_m;
        state.current_velocity_m_s = 0.0;
        state.phase = FlightPhase::Complete;
        return TickOutcome::Arrived;
    }

    let t = state.elapsed_time_s;
    let a = state.acceleration_m_s2;

    if state.coast_time_s == 0.0 {
        // Mini-brachistochrone: thrust flips sign at the midpoint.
        let midpoint = state.total_time_s / 2.0;
        if t < midpoint {
            state.phase = FlightPhase::Accelerating;
            state.current_velocity_m_s = a * t;
            state.distance_covered_m = 0.5 * a * t * t;
        } else {
            let max_velocity = a * midpoint;
            let into_decel = t - midpoint;
            state.phase = FlightPhase::Decelerating;
            state.current_velocity_m_s = max_velocity - a * into_decel;
            state.distance_covered_m = 0.5 * a * midpoint * midpoint
                + max_velocity * into_decel
                - 0.5 * a * into_decel * into_decel;
        }
    } else {
        // Burn-coast-burn: three time windows, each with its own closed
        // form, offset by the distance the earlier windows covered.
        let burn = state.burn_time_s;
        let coast = state.coast_time_s;
        let cruise_velocity = a * burn;
        let burn_distance = 0.5 * a * burn * burn;

        if t < burn {
            state.phase = FlightPhase::Accelerating;
            state.current_velocity_m_s = a * t;
            state.distance_covered_m = 0.5 * a * t * t;
        } else if t < burn + coast {
            let into_coast = t - burn;
            state.phase = FlightPhase::Coasting;
            state.current_velocity_m_s = cruise_velocity;
            state.distance_covered_m = burn_distance + cruise_velocity * into_coast;
        } else {
            let into_decel = t - burn - coast;
            state.phase = FlightPhase::Decelerating;
            state.current_velocity_m_s = cruise_velocity - a * into_decel;
            state.distance_covered_m = burn_distance
                + cruise_velocity * coast
                + cruise_velocity * into_decel
                - 0.5 * a * into_decel * into_decel;
        }
    }

    TickOutcome::InProgress
}
