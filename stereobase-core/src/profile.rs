//! Depth-uncertainty profile at a fixed baseline
//!
//! Once a baseline is chosen, the question turns around: how does precision
//! degrade across the working range? The profile samples σZ over depth for
//! one baseline and reports where the requirement stops being met.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sampling::MIN_DEPTH_SAMPLES,
    errors::{require_positive, require_samples, ConfigResult},
    geometry::CameraSpec,
    grid::DepthRange,
    traits::Validate,
    uncertainty::{depth_sigma, max_depth_for_sigma},
};

/// Depth uncertainty at one depth
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProfilePoint {
    /// Depth in millimeters
    pub z_mm: f64,

    /// Depth standard deviation in millimeters
    pub sigma_z_mm: f64,
}

/// σZ over a depth range for a fixed baseline
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UncertaintyProfile {
    /// Baseline the profile was computed for (mm)
    pub baseline_mm: f64,

    /// Focal length in pixels
    pub focal_length_px: f64,

    /// Disparity noise in pixels
    pub sigma_d_px: f64,

    /// Points in ascending depth order
    pub points: Vec<ProfilePoint>,
}

impl UncertaintyProfile {
    /// Largest sampled depth whose σZ stays within `sigma_z_max_mm`.
    ///
    /// σZ grows with depth, so this is the far edge of the resolvable band.
    pub fn max_resolvable_depth(&self, sigma_z_max_mm: f64) -> Option<f64> {
        self.points
            .iter()
            .rev()
            .find(|p| p.sigma_z_mm <= sigma_z_max_mm)
            .map(|p| p.z_mm)
    }

    /// Unsampled far edge of the resolvable band (mm)
    pub fn analytic_max_depth(&self, sigma_z_max_mm: f64) -> f64 {
        max_depth_for_sigma(
            self.baseline_mm,
            self.focal_length_px,
            self.sigma_d_px,
            sigma_z_max_mm,
        )
    }

    /// Worst σZ over the profile (at the far end)
    pub fn worst_sigma_mm(&self) -> Option<f64> {
        self.points.last().map(|p| p.sigma_z_mm)
    }
}

/// Sample σZ at `num_samples` depths for a fixed baseline.
pub fn uncertainty_profile(
    b_mm: f64,
    camera: &CameraSpec,
    sigma_d_px: f64,
    depth_range: &DepthRange,
    num_samples: usize,
) -> ConfigResult<UncertaintyProfile> {
    require_positive("baseline_mm", b_mm)?;
    require_positive("sigma_d_px", sigma_d_px)?;
    camera.validate()?;
    depth_range.validate()?;
    require_samples(MIN_DEPTH_SAMPLES, num_samples)?;

    let f_px = camera.focal_length_px();
    let points = depth_range
        .samples(num_samples)
        .into_iter()
        .map(|z| ProfilePoint {
            z_mm: z,
            sigma_z_mm: depth_sigma(b_mm, z, f_px, sigma_d_px),
        })
        .collect();

    Ok(UncertaintyProfile {
        baseline_mm: b_mm,
        focal_length_px: f_px,
        sigma_d_px,
        points,
    })
}
