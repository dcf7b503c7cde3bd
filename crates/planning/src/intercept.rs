//! Fixed-point intercept solver for moving destinations.

use serde::Serialize;
use transit_core::units::km_to_m;
use transit_core::vector::Vec2;
use transit_orbits::{BodyId, World};

/// Hard cap on refinement rounds; the result is best-effort past this.
pub const MAX_ROUNDS: usize = 10;

/// Relative distance change below which the fixed point is accepted (0.1%).
pub const RELATIVE_TOL: f64 = 1e-3;

/// A self-consistent arrival solution: where the destination will be when
/// the ship gets there, and where the origin will be at the same instant.
#[derive(Debug, Clone, Serialize)]
pub struct InterceptSolution {
    pub intercept_position_km: Vec2,
    pub origin_position_km: Vec2,
    pub distance_km: f64,
    pub arrival_time_s: f64,
    pub rounds: usize,
    pub converged: bool,
}

/// Refine an aim point against a moving destination.
///
/// Aiming at the destination's current position under-leads a multi-day
/// transit, so the solver iterates: estimate travel time from the current
/// separation, re-evaluate *both* bodies at that arrival instant (shared
/// motion of co-orbiting bodies must cancel, not compound), and repeat
/// until the separation stops changing by more than 0.1% relative — or
/// until the round cap, whichever comes first.
///
/// `travel_time` maps a distance in metres to a duration in seconds; the
/// flight planner's own estimator is the intended closure.
pub fn solve_intercept<F>(
    world: &World,
    origin: BodyId,
    destination: BodyId,
    now_seconds: f64,
    travel_time: F,
) -> InterceptSolution
where
    F: Fn(f64) -> f64,
{
    let mut origin_position = world.position_of(origin, now_seconds);
    let mut intercept_position = world.position_of(destination, now_seconds);
    let mut distance_km = origin_position.distance(intercept_position);
    let mut arrival_time_s = now_seconds;
    let mut rounds = 0;
    let mut converged = false;

    for round in 1..=MAX_ROUNDS {
        rounds = round;
        arrival_time_s = now_seconds + travel_time(km_to_m(distance_km));

        origin_position = world.position_of(origin, arrival_time_s);
        intercept_position = world.position_of(destination, arrival_time_s);
        let refined_km = origin_position.distance(intercept_position);

        let relative_change = if distance_km > 0.0 {
            (refined_km - distance_km).abs() / distance_km
        } else {
            0.0
        };
        distance_km = refined_km;

        if relative_change < RELATIVE_TOL {
            converged = true;
            break;
        }
    }

    InterceptSolution {
        intercept_position_km: intercept_position,
        origin_position_km: origin_position,
        distance_km,
        arrival_time_s,
        rounds,
        converged,
    }
}
