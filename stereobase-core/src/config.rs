//! Rig configuration
//!
//! Bundles every input of the model into one record that can be loaded from
//! JSON, checked once, and handed to the sweep or the profile. `Default` is
//! the reference rig; missing fields in a config file fall back to it.
//!
//! ```json
//! {
//!   "camera": {
//!     "focal_length_mm": 3.0,
//!     "sensor_res_x_px": 1600.0,
//!     "sensor_res_y_px": 1200.0,
//!     "pixel_pitch_mm": 0.003
//!   },
//!   "uncertainty": { "sigma_d_px": 1.0, "sigma_z_max_mm": 1.0 },
//!   "depth_range": { "z_min_mm": 100.0, "z_max_mm": 602.0 },
//!   "baseline_range": { "b_min_mm": 50.0, "b_max_mm": 500.0 },
//!   "num_samples": 10000
//! }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sampling::{DEFAULT_NUM_SAMPLES, MIN_DEPTH_SAMPLES},
    errors::{require_samples, ConfigResult},
    geometry::CameraSpec,
    grid::{BaselineRange, DepthRange},
    profile::{uncertainty_profile, UncertaintyProfile},
    sweep::{optimize_baseline, SweepResult},
    traits::Validate,
    uncertainty::UncertaintyParams,
    volume::resolvable_volume,
};

/// Complete description of a baseline study
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RigConfig {
    /// Camera hardware, shared by both cameras of the pair
    pub camera: CameraSpec,

    /// Disparity noise and precision requirement
    pub uncertainty: UncertaintyParams,

    /// Depths that must be resolved
    pub depth_range: DepthRange,

    /// Candidate baselines
    pub baseline_range: BaselineRange,

    /// Grid points for both the depth and the baseline axis
    pub num_samples: usize,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            camera: CameraSpec::default(),
            uncertainty: UncertaintyParams::default(),
            depth_range: DepthRange::default(),
            baseline_range: BaselineRange::default(),
            num_samples: DEFAULT_NUM_SAMPLES,
        }
    }
}

impl RigConfig {
    /// Same rig with a different grid size
    pub fn with_samples(mut self, num_samples: usize) -> Self {
        self.num_samples = num_samples;
        self
    }

    /// Run the baseline sweep for this rig
    pub fn optimize(&self) -> ConfigResult<SweepResult> {
        optimize_baseline(
            &self.baseline_range,
            &self.camera,
            &self.uncertainty,
            &self.depth_range,
            self.num_samples,
        )
    }

    /// Resolvable volume (mm³) of this rig at one baseline
    pub fn volume_at(&self, b_mm: f64) -> ConfigResult<f64> {
        resolvable_volume(
            b_mm,
            &self.camera,
            &self.uncertainty,
            &self.depth_range,
            self.num_samples,
        )
    }

    /// Depth-uncertainty profile at one baseline over this rig's depth range
    pub fn profile(&self, b_mm: f64, sigma_d_px: f64, num_samples: usize) -> ConfigResult<UncertaintyProfile> {
        uncertainty_profile(b_mm, &self.camera, sigma_d_px, &self.depth_range, num_samples)
    }
}

impl Validate for RigConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.camera.validate()?;
        self.uncertainty.validate()?;
        self.depth_range.validate()?;
        self.baseline_range.validate()?;
        require_samples(MIN_DEPTH_SAMPLES, self.num_samples)
    }
}
