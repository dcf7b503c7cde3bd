//! Kepler's-equation solver: eccentric and true anomaly from mean anomaly.

/// Hard iteration cap. Callers run this once per body per tick per frame,
/// so the worst case must stay at O(6) trig evaluations.
pub const MAX_ITERATIONS: usize = 6;

/// Newton-Raphson step magnitude below which iteration stops early.
pub const CONVERGENCE_TOL: f64 = 1e-10;

/// Solve `M = E - e*sin(E)` for the eccentric anomaly `E`.
///
/// A circular orbit is an exact shortcut: `E == M` when `e == 0`.
/// For `0 < e < 1` the equation is transcendental and solved with
/// Newton-Raphson seeded at `E = M`, which converges in a handful of
/// steps for the eccentricities this engine models.
pub fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    if eccentricity == 0.0 {
        return mean_anomaly;
    }

    let mut e_anom = mean_anomaly;
    for _ in 0..MAX_ITERATIONS {
        let delta = (mean_anomaly - e_anom + eccentricity * e_anom.sin())
            / (1.0 - eccentricity * e_anom.cos());
        e_anom += delta;
        if delta.abs() < CONVERGENCE_TOL {
            break;
        }
    }
    e_anom
}

/// True anomaly from mean anomaly.
///
/// Uses `atan2` on the half-angle form for full quadrant coverage:
/// `θ = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`.
/// The circular case returns the mean anomaly without touching the
/// iterative solver.
pub fn true_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    if eccentricity == 0.0 {
        return mean_anomaly;
    }

    let e_anom = eccentric_anomaly(mean_anomaly, eccentricity);
    let half = e_anom / 2.0;
    let y = (1.0 + eccentricity).sqrt() * half.sin();
    let x = (1.0 - eccentricity).sqrt() * half.cos();
    2.0 * y.atan2(x)
}
