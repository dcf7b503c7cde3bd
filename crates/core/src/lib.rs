//! Core units, constants, and shared primitives for the transit engine workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Seconds per simulated day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Seconds per simulated Julian year.
    pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}

/// Planar vector type used for body positions, star at the origin.
pub mod vector {
    use serde::{Deserialize, Serialize};

    /// A 2D position or offset in kilometres.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct Vec2 {
        pub x: f64,
        pub y: f64,
    }

    impl Vec2 {
        pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Vec2 { x, y }
        }

        /// Component-wise sum, used to stack a local orbital offset onto a
        /// parent body's position.
        #[inline]
        pub fn add(self, other: Vec2) -> Vec2 {
            Vec2 {
                x: self.x + other.x,
                y: self.y + other.y,
            }
        }

        /// Euclidean norm.
        #[inline]
        pub fn norm(self) -> f64 {
            (self.x * self.x + self.y * self.y).sqrt()
        }

        /// Euclidean distance to another point.
        #[inline]
        pub fn distance(self, other: Vec2) -> f64 {
            let dx = self.x - other.x;
            let dy = self.y - other.y;
            (dx * dx + dy * dy).sqrt()
        }
    }
}
