//! Sampling and Numeric Guards
//!
//! Grid sizes for depth integration and baseline sweep, and the floor that
//! keeps the uncertainty formula finite.

/// Default number of grid points for both the depth and the baseline grid.
///
/// At 10 000 points the trapezoidal error on the reference rig is far below
/// the 1 % level; the sweep costs 10⁸ formula evaluations.
pub const DEFAULT_NUM_SAMPLES: usize = 10_000;

/// Default number of depths in an uncertainty profile.
pub const DEFAULT_PROFILE_SAMPLES: usize = 800;

/// Fewest depth samples that span an interval for integration.
pub const MIN_DEPTH_SAMPLES: usize = 2;

/// Fewest baseline samples a sweep can select from.
pub const MIN_BASELINE_SAMPLES: usize = 1;

/// Floor applied to the baseline before dividing by it (mm).
///
/// Keeps `depth_sigma` finite for a zero or near-zero baseline.
pub const MIN_BASELINE_MM: f64 = 1e-9;
