//! Trajectory-shape selection: mini-brachistochrone vs burn-coast-burn.

use transit_orbits::BodyId;
use transit_propulsion::{ShipCapability, propellant_for_delta_v};

use crate::{FlightPhase, FlightPolicy, FlightState};

/// Plan a one-way flight over `distance_m` with the given ship.
///
/// The branch decision compares the brachistochrone delta-v
/// `2·√(d·a)` — the cost of never coasting — against the leg's
/// allocated budget. Short hops take the brachistochrone branch and
/// their travel time scales with `√distance`; longer legs accelerate to
/// a fixed cruise velocity of half the allocated budget, coast, and
/// spend the other half braking.
///
/// Degenerate ships (no thrust, no delta-v, zero mass) or non-finite
/// arithmetic fall back to a one-tick flight instead of NaN or infinite
/// times.
pub fn plan_flight(
    origin: BodyId,
    destination: BodyId,
    distance_m: f64,
    ship: &ShipCapability,
    policy: &FlightPolicy,
) -> FlightState {
    let acceleration = ship.acceleration_m_s2();
    let allocated_dv = ship.delta_v_available_m_s() * policy.leg_delta_v_fraction;
    let shape = trajectory_shape(distance_m, acceleration, allocated_dv, policy);

    FlightState {
        origin,
        destination,
        total_distance_m: distance_m,
        distance_covered_m: 0.0,
        current_velocity_m_s: 0.0,
        phase: FlightPhase::Accelerating,
        burn_time_s: shape.burn_time_s,
        coast_time_s: shape.coast_time_s,
        elapsed_time_s: 0.0,
        total_time_s: shape.total_time_s,
        acceleration_m_s2: shape.acceleration_m_s2,
        dock_on_arrival: false,
        origin_position_km: None,
        intercept_position_km: None,
    }
}

/// One-way travel time for a distance and ship under the shared policy.
///
/// This is the single source of truth for flight duration: pricing and
/// quote layers call this rather than re-deriving the kinematics with a
/// different mass basis.
pub fn travel_time(distance_m: f64, ship: &ShipCapability, policy: &FlightPolicy) -> f64 {
    let acceleration = ship.acceleration_m_s2();
    let allocated_dv = ship.delta_v_available_m_s() * policy.leg_delta_v_fraction;
    trajectory_shape(distance_m, acceleration, allocated_dv, policy).total_time_s
}

/// Propellant mass consumed by one leg, inverse-Tsiolkovsky on the
/// delta-v the planned trajectory actually spends. Same mass basis as
/// the planner (current mass for acceleration, dry mass for the
/// propellant relation).
pub fn leg_propellant_mass(distance_m: f64, ship: &ShipCapability, policy: &FlightPolicy) -> f64 {
    let acceleration = ship.acceleration_m_s2();
    let allocated_dv = ship.delta_v_available_m_s() * policy.leg_delta_v_fraction;
    let shape = trajectory_shape(distance_m, acceleration, allocated_dv, policy);
    // Both branches burn for 2*burn_time at constant acceleration.
    let spent_dv = 2.0 * shape.acceleration_m_s2 * shape.burn_time_s;
    propellant_for_delta_v(spent_dv, ship.dry_mass_kg, ship.isp_seconds)
}

#[derive(Debug, Clone, Copy)]
struct TrajectoryShape {
    burn_time_s: f64,
    coast_time_s: f64,
    total_time_s: f64,
    acceleration_m_s2: f64,
}

fn trajectory_shape(
    distance_m: f64,
    acceleration_m_s2: f64,
    allocated_dv_m_s: f64,
    policy: &FlightPolicy,
) -> TrajectoryShape {
    if acceleration_m_s2 <= 0.0 || allocated_dv_m_s <= 0.0 || distance_m <= 0.0 {
        return one_tick_fallback(policy);
    }

    let brachistochrone_dv = 2.0 * (distance_m * acceleration_m_s2).sqrt();

    let shape = if brachistochrone_dv <= allocated_dv_m_s {
        // Short leg: accelerate to the midpoint, decelerate symmetrically.
        let total_time = 2.0 * (distance_m / acceleration_m_s2).sqrt();
        TrajectoryShape {
            burn_time_s: total_time / 2.0,
            coast_time_s: 0.0,
            total_time_s: total_time,
            acceleration_m_s2,
        }
    } else {
        // Long leg: half the budget accelerating, half decelerating,
        // constant-velocity coast in between.
        let cruise_velocity = allocated_dv_m_s / 2.0;
        let burn_time = cruise_velocity / acceleration_m_s2;
        let burn_distance = 0.5 * acceleration_m_s2 * burn_time * burn_time;
        let coast_time = (distance_m - 2.0 * burn_distance) / cruise_velocity;
        TrajectoryShape {
            burn_time_s: burn_time,
            coast_time_s: coast_time,
            total_time_s: 2.0 * burn_time + coast_time,
            acceleration_m_s2,
        }
    };

    if !shape.total_time_s.is_finite() || shape.total_time_s <= 0.0 {
        return one_tick_fallback(policy);
    }
    shape
}

fn one_tick_fallback(policy: &FlightPolicy) -> TrajectoryShape {
    TrajectoryShape {
        burn_time_s: 0.0,
        coast_time_s: policy.tick_seconds,
        total_time_s: policy.tick_seconds,
        acceleration_m_s2: 0.0,
    }
}
