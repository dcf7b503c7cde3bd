//! Flight trajectory planning and per-tick advancement.
//!
//! The planner turns a one-way distance plus ship capability into an
//! immutable trajectory shape; the advancer integrates that shape forward
//! one tick at a time with closed-form kinematics.

use serde::{Deserialize, Serialize};
use transit_core::vector::Vec2;
use transit_orbits::BodyId;

pub mod advance;
pub mod profile;

pub use advance::{TickOutcome, advance};
pub use profile::{leg_propellant_mass, plan_flight, travel_time};

/// Named planning policy shared by the planner and every external
/// estimator, so travel-time and fuel figures cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightPolicy {
    /// Fraction of available delta-v allocated to one leg; the remainder
    /// is reserved for the return leg and maneuvering margin.
    pub leg_delta_v_fraction: f64,
    /// Simulation tick quantum in seconds, also the degenerate flight
    /// duration when a ship cannot accelerate at all.
    pub tick_seconds: f64,
}

impl Default for FlightPolicy {
    fn default() -> Self {
        FlightPolicy {
            leg_delta_v_fraction: 0.5,
            tick_seconds: 60.0,
        }
    }
}

/// Where the ship is in its acceleration profile. `Complete` is the
/// explicit terminal state; a completed flight never reports
/// `Decelerating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightPhase {
    Accelerating,
    Coasting,
    Decelerating,
    Complete,
}

/// A planned flight plus its advancement fields.
///
/// Created once at flight initialization; only `distance_covered_m`,
/// `current_velocity_m_s`, `elapsed_time_s`, and `phase` change after
/// that, and only through [`advance`]. All fields round-trip through
/// serde so the host can persist in-transit ships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    pub origin: BodyId,
    pub destination: BodyId,
    pub total_distance_m: f64,
    /// Monotonically non-decreasing.
    pub distance_covered_m: f64,
    pub current_velocity_m_s: f64,
    pub phase: FlightPhase,
    pub burn_time_s: f64,
    /// Zero exactly when the trajectory never reaches a cruise velocity;
    /// otherwise `total_time_s == 2*burn_time_s + coast_time_s`.
    pub coast_time_s: f64,
    pub elapsed_time_s: f64,
    pub total_time_s: f64,
    pub acceleration_m_s2: f64,
    /// Consumed by the host's scheduling layer on arrival.
    pub dock_on_arrival: bool,
    /// Origin position frozen at departure, for moving-destination flights.
    pub origin_position_km: Option<Vec2>,
    /// Intercept aim point frozen at departure.
    pub intercept_position_km: Option<Vec2>,
}
