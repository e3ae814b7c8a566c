//! Precision Requirement and Search Space of the Reference Rig
//!
//! The rig looks down through water at an ice surface. The depth range is
//! bounded below by the lens and above by the distance to the ice; the
//! baseline range is bounded below by the camera housing width.

// ===== DISPARITY NOISE =====

/// Disparity noise, one standard deviation (px).
///
/// Conservative figure for an underwater scene with weak texture.
/// Sub-pixel matchers reach 0.2-0.5 px in air.
pub const REFERENCE_SIGMA_D_PX: f64 = 1.0;

/// Disparity noise used for the fixed-baseline uncertainty profile (px).
///
/// Optimistic counterpart of `REFERENCE_SIGMA_D_PX`.
pub const PROFILE_SIGMA_D_PX: f64 = 0.5;

// ===== PRECISION TARGET =====

/// Largest tolerable depth standard deviation (mm).
pub const REFERENCE_SIGMA_Z_MAX_MM: f64 = 1.0;

// ===== DEPTH RANGE =====

/// Nearest depth that must be resolved (mm).
///
/// Source: lens minimum focus distance
pub const REFERENCE_Z_MIN_MM: f64 = 100.0;

/// Farthest depth that must be resolved (mm).
///
/// Distance from the sensor to the ice surface.
pub const REFERENCE_Z_MAX_MM: f64 = 602.0;

// ===== BASELINE RANGE =====

/// Smallest buildable baseline (mm).
///
/// Two housings touching; approximates the pinhole distance.
pub const REFERENCE_B_MIN_MM: f64 = 50.0;

/// Largest baseline considered (mm).
pub const REFERENCE_B_MAX_MM: f64 = 500.0;

/// Baseline of the built prototype, used for the uncertainty profile (mm).
pub const PROFILE_BASELINE_MM: f64 = 148.0;
