//! Shared fixtures for integration tests
//!
//! - Reference rig and scaled-down variants for fast sweeps
//! - Tolerance helpers for floating-point comparisons

#![allow(dead_code)]

use stereobase_core::{
    BaselineRange, CameraSpec, DepthRange, RigConfig, UncertaintyParams,
};

/// Grid size for sweeps that must stay fast in debug builds.
pub const FAST_SAMPLES: usize = 400;

/// Far edge of the reference depth range (mm).
pub const REFERENCE_Z_MAX_MM: f64 = 602.0;

/// Baseline at which the far edge first meets σZ ≤ 1 mm on the reference rig.
///
/// Solves 602² / (1000 · b) = 1.
pub const REFERENCE_KNEE_BASELINE_MM: f64 = REFERENCE_Z_MAX_MM * REFERENCE_Z_MAX_MM / 1000.0;

/// Reference rig with a coarse grid
pub fn fast_reference() -> RigConfig {
    RigConfig::default().with_samples(FAST_SAMPLES)
}

/// Camera with the given focal length and the reference sensor
pub fn camera_with_focal_length(focal_length_mm: f64) -> CameraSpec {
    CameraSpec {
        focal_length_mm,
        ..CameraSpec::default()
    }
}

/// Rig where precision never masks a depth
pub fn unmasked(mut config: RigConfig) -> RigConfig {
    config.uncertainty = UncertaintyParams::new(config.uncertainty.sigma_d_px, 1e9);
    config
}

/// Build a rig from explicit ranges on the reference camera
pub fn rig(depths: (f64, f64), baselines: (f64, f64), samples: usize) -> RigConfig {
    RigConfig {
        depth_range: DepthRange::new(depths.0, depths.1),
        baseline_range: BaselineRange::new(baselines.0, baselines.1),
        num_samples: samples,
        ..RigConfig::default()
    }
}

/// |a - b| / |b|
pub fn relative_diff(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}
