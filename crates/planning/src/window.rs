//! Launch-window quality analysis: how favorable is departing right now,
//! and when does the separation next bottom out.

use serde::Serialize;
use transit_core::constants::{SECONDS_PER_DAY, SECONDS_PER_YEAR};
use transit_orbits::{BodyId, World};

/// Fewest separation samples across the horizon; sparser risks skipping
/// the minimum entirely.
pub const MIN_SAMPLES: usize = 100;

/// Most separation samples; denser is wasted work.
pub const MAX_SAMPLES: usize = 1000;

/// Look-ahead cap, 10 simulated years.
pub const HORIZON_CAP_S: f64 = 10.0 * SECONDS_PER_YEAR;

/// A candidate local minimum must first drop this far below the starting
/// separation, or it is floating-point noise, not a window.
pub const MINIMUM_DROP_FRACTION: f64 = 0.05;

/// Four-bucket classification of current separation within the sampled
/// [min, max] range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlignmentQuality {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl AlignmentQuality {
    /// Pure function of where `current` sits in `[min, max]`. A zero-width
    /// range (co-orbiting bodies) is always excellent.
    pub fn classify(current_km: f64, min_km: f64, max_km: f64) -> AlignmentQuality {
        let range = max_km - min_km;
        if range <= 0.0 {
            return AlignmentQuality::Excellent;
        }
        let fraction = (current_km - min_km) / range;
        if fraction <= 0.20 {
            AlignmentQuality::Excellent
        } else if fraction <= 0.45 {
            AlignmentQuality::Good
        } else if fraction <= 0.70 {
            AlignmentQuality::Moderate
        } else {
            AlignmentQuality::Poor
        }
    }
}

/// Advisory record consumed by UI panels.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchWindow {
    pub current_distance_km: f64,
    pub min_distance_km: f64,
    pub max_distance_km: f64,
    pub quality: AlignmentQuality,
    /// Absolute simulated time of the first local separation minimum in
    /// the horizon, if one occurs.
    pub next_window_s: Option<f64>,
    pub horizon_s: f64,
    pub samples: usize,
}

/// Sample the separation of two bodies over twice their synodic period
/// (capped at ten years) and classify the current alignment.
pub fn analyze_launch_window(
    world: &World,
    origin: BodyId,
    destination: BodyId,
    now_seconds: f64,
) -> LaunchWindow {
    let horizon_s = horizon(world, origin, destination);
    let samples = sample_count(horizon_s);

    let starting_km = world.distance_between(origin, destination, now_seconds);
    let mut min_km = starting_km;
    let mut max_km = starting_km;
    let mut next_window_s = None;

    let mut previous_km = starting_km;
    let mut previous_t = now_seconds;
    let mut descending = false;

    for i in 1..samples {
        let t = now_seconds + horizon_s * i as f64 / (samples - 1) as f64;
        let d = world.distance_between(origin, destination, t);
        min_km = min_km.min(d);
        max_km = max_km.max(d);

        if next_window_s.is_none() {
            if d < previous_km {
                descending = true;
            } else if d > previous_km {
                // Turned upward: the previous sample was a local minimum,
                // provided it dipped far enough below the start.
                if descending && previous_km < starting_km * (1.0 - MINIMUM_DROP_FRACTION) {
                    next_window_s = Some(previous_t);
                }
                descending = false;
            }
        }

        previous_km = d;
        previous_t = t;
    }

    LaunchWindow {
        current_distance_km: starting_km,
        min_distance_km: min_km,
        max_distance_km: max_km,
        quality: AlignmentQuality::classify(starting_km, min_km, max_km),
        next_window_s,
        horizon_s,
        samples,
    }
}

/// Twice the synodic period of the pair, the longer single period when the
/// periods coincide or one body is static, all capped at ten years.
fn horizon(world: &World, a: BodyId, b: BodyId) -> f64 {
    let horizon = match (world.period_of(a), world.period_of(b)) {
        (Some(ta), Some(tb)) if (ta - tb).abs() > f64::EPSILON => {
            let synodic = 1.0 / (1.0 / ta - 1.0 / tb).abs();
            2.0 * synodic
        }
        (Some(ta), Some(tb)) => 2.0 * ta.max(tb),
        (Some(t), None) | (None, Some(t)) => 2.0 * t,
        (None, None) => HORIZON_CAP_S,
    };
    horizon.min(HORIZON_CAP_S)
}

/// One sample per simulated day, clamped to the [100, 1000] band.
fn sample_count(horizon_s: f64) -> usize {
    ((horizon_s / SECONDS_PER_DAY) as usize).clamp(MIN_SAMPLES, MAX_SAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_buckets() {
        assert_eq!(
            AlignmentQuality::classify(10.0, 10.0, 110.0),
            AlignmentQuality::Excellent
        );
        assert_eq!(
            AlignmentQuality::classify(50.0, 10.0, 110.0),
            AlignmentQuality::Good
        );
        assert_eq!(
            AlignmentQuality::classify(75.0, 10.0, 110.0),
            AlignmentQuality::Moderate
        );
        assert_eq!(
            AlignmentQuality::classify(110.0, 10.0, 110.0),
            AlignmentQuality::Poor
        );
    }

    #[test]
    fn zero_width_range_is_excellent() {
        assert_eq!(
            AlignmentQuality::classify(42.0, 42.0, 42.0),
            AlignmentQuality::Excellent
        );
    }

    #[test]
    fn sample_count_stays_in_band() {
        assert_eq!(sample_count(0.0), MIN_SAMPLES);
        assert_eq!(sample_count(SECONDS_PER_DAY * 500.0), 500);
        assert_eq!(sample_count(HORIZON_CAP_S), MAX_SAMPLES);
    }
}
