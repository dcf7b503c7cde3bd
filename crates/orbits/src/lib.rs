//! Orbital position engine: per-body angle/position computation with
//! hierarchical "orbits-an-orbiter" composition over an arena body table.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use thiserror::Error;
use transit_core::vector::Vec2;

pub mod kepler;

/// Index of a body inside a [`World`]. Stable for the lifetime of the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub usize);

/// Two-body Keplerian elements for a body orbiting either the primary star
/// (`parent == None`) or another body in the same world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis in kilometres.
    pub radius_km: f64,
    /// Eccentricity, `0 <= e < 1` for every modeled body.
    pub eccentricity: f64,
    /// Orbital period in seconds. Non-positive means the body is static
    /// at its initial angle.
    pub period_s: f64,
    /// Mean anomaly at epoch 0, radians.
    pub initial_angle_rad: f64,
    pub parent: Option<BodyId>,
}

/// How a body moves. Legacy bodies without orbital elements sit at a fixed
/// point; everything else follows a conic around its parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyMotion {
    Orbiting(OrbitalElements),
    Fixed(Vec2),
}

/// A named body plus its per-tick cached derived quantities.
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub motion: BodyMotion,
    /// Cached world position, refreshed by [`World::update_positions`].
    pub position_km: Vec2,
    /// Cached separation from the world's reference body, kilometres.
    pub distance_from_reference_km: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, motion: BodyMotion) -> Self {
        let position_km = match motion {
            BodyMotion::Fixed(p) => p,
            BodyMotion::Orbiting(_) => Vec2::ZERO,
        };
        Body {
            name: name.into(),
            motion,
            position_km,
            distance_from_reference_km: 0.0,
        }
    }
}

/// Structural problems detected when assembling a world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("body {child} references unknown parent index {parent}")]
    UnknownParent { child: usize, parent: usize },
    #[error("parent chain starting at body {0} forms a cycle")]
    ParentCycle(usize),
    #[error("reference body index {0} is out of range")]
    UnknownReference(usize),
}

/// The arena of bodies an engine tick operates over.
#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    reference: BodyId,
}

impl World {
    /// Assemble a world, validating the parent graph up front so position
    /// lookups can walk parent chains without re-checking for cycles.
    pub fn new(bodies: Vec<Body>, reference: BodyId) -> Result<World, WorldError> {
        if reference.0 >= bodies.len() {
            return Err(WorldError::UnknownReference(reference.0));
        }
        for (index, body) in bodies.iter().enumerate() {
            if let BodyMotion::Orbiting(elements) = body.motion {
                if let Some(parent) = elements.parent {
                    if parent.0 >= bodies.len() {
                        return Err(WorldError::UnknownParent {
                            child: index,
                            parent: parent.0,
                        });
                    }
                }
            }
        }
        for index in 0..bodies.len() {
            // Walk the chain with a hop budget of the body count; any
            // longer chain must revisit a body.
            let mut current = index;
            for hops in 0.. {
                match parent_of(&bodies, current) {
                    Some(next) => current = next,
                    None => break,
                }
                if hops >= bodies.len() {
                    return Err(WorldError::ParentCycle(index));
                }
            }
        }
        Ok(World { bodies, reference })
    }

    pub fn reference(&self) -> BodyId {
        self.reference
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0]
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Look a body up by name (case-insensitive, matching catalog usage).
    pub fn body_id(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.name.eq_ignore_ascii_case(name))
            .map(BodyId)
    }

    /// Orbital period of a body, when it has one and it is positive.
    pub fn period_of(&self, id: BodyId) -> Option<f64> {
        match self.body(id).motion {
            BodyMotion::Orbiting(elements) if elements.period_s > 0.0 => Some(elements.period_s),
            _ => None,
        }
    }

    /// World position of a body at simulated time `t`, resolved by walking
    /// the parent chain iteratively and summing local conic offsets.
    pub fn position_of(&self, id: BodyId, t_seconds: f64) -> Vec2 {
        let mut position = Vec2::ZERO;
        let mut current = Some(id);
        while let Some(BodyId(index)) = current {
            match self.bodies[index].motion {
                BodyMotion::Fixed(p) => {
                    position = position.add(p);
                    current = None;
                }
                BodyMotion::Orbiting(elements) => {
                    position = position.add(local_offset(&elements, t_seconds));
                    current = elements.parent;
                }
            }
        }
        position
    }

    /// Refresh every body's cached position and distance-from-reference.
    ///
    /// The reference body is computed first so the second pass can read its
    /// fresh position; distance-from-reference is queried often enough that
    /// it must not cost a tree walk per read.
    pub fn update_positions(&mut self, t_seconds: f64) {
        let reference_pos = self.position_of(self.reference, t_seconds);
        self.bodies[self.reference.0].position_km = reference_pos;
        self.bodies[self.reference.0].distance_from_reference_km = 0.0;

        for index in 0..self.bodies.len() {
            if index == self.reference.0 {
                continue;
            }
            let position = self.position_of(BodyId(index), t_seconds);
            self.bodies[index].position_km = position;
            self.bodies[index].distance_from_reference_km = position.distance(reference_pos);
        }
    }

    /// Euclidean separation of two bodies at time `t`, kilometres.
    pub fn distance_between(&self, a: BodyId, b: BodyId, t_seconds: f64) -> f64 {
        self.position_of(a, t_seconds)
            .distance(self.position_of(b, t_seconds))
    }
}

fn parent_of(bodies: &[Body], index: usize) -> Option<usize> {
    match bodies[index].motion {
        BodyMotion::Orbiting(elements) => elements.parent.map(|p| p.0),
        BodyMotion::Fixed(_) => None,
    }
}

/// Orbital angle (true anomaly) of a body at simulated time `t`.
///
/// A non-positive period marks a degenerate static body pinned at its
/// initial angle.
pub fn angle_at(elements: &OrbitalElements, t_seconds: f64) -> f64 {
    if elements.period_s <= 0.0 {
        return elements.initial_angle_rad;
    }
    let mean_anomaly =
        (elements.initial_angle_rad + TAU * t_seconds / elements.period_s).rem_euclid(TAU);
    kepler::true_anomaly(mean_anomaly, elements.eccentricity)
}

/// Conic radius at true anomaly `theta`: `a` for a circle, otherwise the
/// polar equation `a(1-e²)/(1+e·cosθ)`.
pub fn radius_at(radius_km: f64, eccentricity: f64, theta: f64) -> f64 {
    if eccentricity == 0.0 {
        return radius_km;
    }
    radius_km * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * theta.cos())
}

/// Offset of an orbiting body from its parent at time `t`.
pub fn local_offset(elements: &OrbitalElements, t_seconds: f64) -> Vec2 {
    let theta = angle_at(elements, t_seconds);
    let r = radius_at(elements.radius_km, elements.eccentricity, theta);
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circular(radius_km: f64, period_s: f64, parent: Option<BodyId>) -> BodyMotion {
        BodyMotion::Orbiting(OrbitalElements {
            radius_km,
            eccentricity: 0.0,
            period_s,
            initial_angle_rad: 0.0,
            parent,
        })
    }

    #[test]
    fn cycle_is_rejected_at_load() {
        let bodies = vec![
            Body::new("a", circular(10.0, 100.0, Some(BodyId(1)))),
            Body::new("b", circular(10.0, 100.0, Some(BodyId(0)))),
        ];
        assert!(matches!(
            World::new(bodies, BodyId(0)),
            Err(WorldError::ParentCycle(_))
        ));
    }

    #[test]
    fn unknown_parent_is_rejected_at_load() {
        let bodies = vec![Body::new("a", circular(10.0, 100.0, Some(BodyId(7))))];
        assert!(matches!(
            World::new(bodies, BodyId(0)),
            Err(WorldError::UnknownParent { child: 0, parent: 7 })
        ));
    }

    #[test]
    fn static_body_keeps_initial_angle() {
        let elements = OrbitalElements {
            radius_km: 50.0,
            eccentricity: 0.0,
            period_s: 0.0,
            initial_angle_rad: 1.25,
            parent: None,
        };
        assert_eq!(angle_at(&elements, 0.0), 1.25);
        assert_eq!(angle_at(&elements, 9_999.0), 1.25);
    }

    #[test]
    fn quarter_period_reaches_quarter_turn() {
        let elements = OrbitalElements {
            radius_km: 100.0,
            eccentricity: 0.0,
            period_s: 400.0,
            initial_angle_rad: 0.0,
            parent: None,
        };
        let angle = angle_at(&elements, 100.0);
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn eccentric_radius_spans_periapsis_to_apoapsis() {
        let a = 1_000.0;
        let e = 0.1;
        let periapsis = radius_at(a, e, 0.0);
        let apoapsis = radius_at(a, e, std::f64::consts::PI);
        assert!((periapsis - a * (1.0 - e)).abs() < 1e-9);
        assert!((apoapsis - a * (1.0 + e)).abs() < 1e-9);
    }
}
