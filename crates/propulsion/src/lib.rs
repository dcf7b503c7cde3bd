//! Ship capability and propellant mass relations.

use serde::{Deserialize, Serialize};
use transit_core::constants::G0;

/// What the flight planner needs to know about a ship. Supplied by the
/// host's ship-class registry; this crate never owns a registry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipCapability {
    pub name: String,
    pub dry_mass_kg: f64,
    /// Mass right now, propellant included.
    pub current_mass_kg: f64,
    pub thrust_newtons: f64,
    pub isp_seconds: f64,
    /// Hard cap on total delta-v regardless of what the mass ratio allows.
    pub max_delta_v_m_s: f64,
}

impl ShipCapability {
    /// Current acceleration under full thrust, m/s². Zero mass yields zero
    /// acceleration rather than infinity; the planner degrades gracefully.
    pub fn acceleration_m_s2(&self) -> f64 {
        if self.current_mass_kg <= 0.0 {
            return 0.0;
        }
        self.thrust_newtons / self.current_mass_kg
    }

    /// Delta-v still available on the current mass, capped by the ship's
    /// rated maximum.
    pub fn delta_v_available_m_s(&self) -> f64 {
        tsiolkovsky_delta_v(self.isp_seconds, self.current_mass_kg, self.dry_mass_kg)
            .min(self.max_delta_v_m_s)
    }
}

/// Ideal delta-v from the Tsiolkovsky rocket equation,
/// `Δv = Isp·g0·ln(m_wet/m_dry)`.
pub fn tsiolkovsky_delta_v(isp_seconds: f64, wet_mass_kg: f64, dry_mass_kg: f64) -> f64 {
    if isp_seconds <= 0.0 || dry_mass_kg <= 0.0 || wet_mass_kg <= dry_mass_kg {
        return 0.0;
    }
    isp_seconds * G0 * (wet_mass_kg / dry_mass_kg).ln()
}

/// Propellant mass needed for a given delta-v on top of a dry mass,
/// the inverse Tsiolkovsky relation `m_dry·(e^(Δv/(Isp·g0)) − 1)`.
pub fn propellant_for_delta_v(delta_v_m_s: f64, dry_mass_kg: f64, isp_seconds: f64) -> f64 {
    if delta_v_m_s <= 0.0 || dry_mass_kg <= 0.0 || isp_seconds <= 0.0 {
        return 0.0;
    }
    dry_mass_kg * ((delta_v_m_s / (isp_seconds * G0)).exp() - 1.0)
}
