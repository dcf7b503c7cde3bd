//! Conversion from parsed configuration into runtime engine types.
//!
//! This is the caller-side boundary of the numerical core: data-integrity
//! degradations are logged here, and the one fatal configuration error —
//! an unresolvable ship class — is raised here.

use thiserror::Error;
use tracing::warn;

use transit_config::{BodyConfig, BodyMotionConfig, ShipClassConfig};
use transit_core::vector::Vec2;
use transit_orbits::{Body, BodyId, BodyMotion, OrbitalElements, World, WorldError};
use transit_propulsion::ShipCapability;

/// Errors surfaced when converting catalogs into runtime types.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reference body '{0}' not found in world manifest")]
    UnknownReferenceBody(String),
    #[error("ship class '{0}' not found in fleet catalog")]
    UnknownShipClass(String),
    #[error("ship catalog is empty")]
    EmptyCatalog,
    #[error("world manifest rejected: {0}")]
    World(#[from] WorldError),
}

/// Build a runtime [`World`] from body configurations.
///
/// A parent reference naming a body that does not exist is degraded to
/// "orbits the primary" with a warning; structural problems (cycles) are
/// rejected by [`World::new`].
pub fn build_world(configs: &[BodyConfig], reference_name: &str) -> Result<World, CatalogError> {
    let resolve = |name: &str| -> Option<BodyId> {
        configs
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .map(BodyId)
    };

    let mut bodies = Vec::with_capacity(configs.len());
    for config in configs {
        let motion = match &config.motion {
            BodyMotionConfig::Fixed { x_km, y_km } => BodyMotion::Fixed(Vec2::new(*x_km, *y_km)),
            BodyMotionConfig::Orbiting {
                orbital_radius_km,
                eccentricity,
                orbital_period_s,
                initial_angle_rad,
            } => {
                let parent = match &config.parent {
                    None => None,
                    Some(parent_name) => match resolve(parent_name) {
                        Some(id) => Some(id),
                        None => {
                            warn!(
                                body = %config.name,
                                parent = %parent_name,
                                "parent body missing from manifest; treating as orbiting the primary"
                            );
                            None
                        }
                    },
                };
                BodyMotion::Orbiting(OrbitalElements {
                    radius_km: *orbital_radius_km,
                    eccentricity: *eccentricity,
                    period_s: *orbital_period_s,
                    initial_angle_rad: *initial_angle_rad,
                    parent,
                })
            }
        };
        bodies.push(Body::new(config.name.clone(), motion));
    }

    let reference = resolve(reference_name)
        .ok_or_else(|| CatalogError::UnknownReferenceBody(reference_name.to_string()))?;
    Ok(World::new(bodies, reference)?)
}

/// Convert a ship-class configuration into runtime capability, fully fueled.
pub fn ship_capability(config: &ShipClassConfig) -> ShipCapability {
    ShipCapability {
        name: config.name.clone(),
        dry_mass_kg: config.dry_mass_kg,
        current_mass_kg: config.dry_mass_kg + config.propellant_mass_kg,
        thrust_newtons: config.thrust_newtons,
        isp_seconds: config.isp_seconds,
        max_delta_v_m_s: config.max_delta_v_m_s.unwrap_or(f64::INFINITY),
    }
}

/// Select a ship class from the catalog by name.
///
/// Unlike the physics edge cases this engine absorbs, an unknown ship
/// class is a caller configuration bug and propagates as an error.
pub fn select_ship(
    configs: &[ShipClassConfig],
    requested: &str,
) -> Result<ShipCapability, CatalogError> {
    if configs.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    configs
        .iter()
        .find(|cfg| cfg.name.eq_ignore_ascii_case(requested))
        .map(ship_capability)
        .ok_or_else(|| CatalogError::UnknownShipClass(requested.to_string()))
}
