//! Planning-time tools invoked before departure: intercept refinement
//! against a moving destination and launch-window quality analysis.

pub mod intercept;
pub mod window;

pub use intercept::{InterceptSolution, solve_intercept};
pub use window::{AlignmentQuality, LaunchWindow, analyze_launch_window};
