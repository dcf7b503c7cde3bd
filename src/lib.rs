//! Orbital position and flight trajectory engine.
//!
//! Computes where orbiting bodies are at any simulated instant, how far
//! apart they sit, and how a thrust-limited ship travels between them —
//! advanced one tick at a time by the host's scheduler. Keeping the
//! numerics in library crates lets multiple front-ends (CLI, game loop,
//! UI projection) share it.

pub mod catalog;

pub use transit_core as core;
pub use transit_export as export;
pub use transit_flight as flight;
pub use transit_orbits as orbits;
pub use transit_planning as planning;
pub use transit_propulsion as propulsion;

pub mod config {
    pub use transit_config::*;
}

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
