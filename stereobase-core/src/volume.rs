//! Overlap-Volume Integrator
//!
//! ## Model
//!
//! Two identical cameras sit side by side, `b` millimeters apart, looking
//! along parallel axes. At depth `Z` each camera sees a `W × H` rectangle.
//! The rectangles are offset laterally by the baseline, so the region both
//! cameras see is
//!
//! ```text
//!   W_ov(Z) = max(0, W(Z) - b)
//!   A_ov(Z) = W_ov(Z) · H(Z)
//! ```
//!
//! Only depths where triangulation is precise enough count:
//!
//! ```text
//!   A(Z) = A_ov(Z)   if σZ(b, Z) <= σZ_max
//!          0         otherwise
//!
//!   V(b) = ∫ A(Z) dZ   over [Z_min, Z_max]   (trapezoidal rule)
//! ```
//!
//! ## Accuracy
//!
//! The trapezoidal error on smooth stretches is O(1/n²). The mask adds one
//! step discontinuity at the depth where σZ crosses the requirement, which
//! costs at most one grid interval of area. On the reference rig, 10 000
//! depth samples put the total error well under 0.1 %.
//!
//! ## Reuse
//!
//! The depth grid does not depend on the baseline. [`DepthGrid`] is built
//! once and handed to [`resolvable_volume_on`] for every candidate; the
//! checked entry point [`resolvable_volume`] builds its own.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sampling::MIN_DEPTH_SAMPLES,
    errors::{require_non_negative, require_samples, ConfigResult},
    geometry::{CameraOptics, CameraSpec},
    grid::{trapezoid, DepthRange},
    traits::Validate,
    uncertainty::{depth_sigma, UncertaintyParams},
};

/// Discretized depth axis, shared by every baseline of a sweep
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGrid {
    depths_mm: Vec<f64>,
}

impl DepthGrid {
    /// Build `num_samples` evenly spaced depths over `range`
    pub fn new(range: &DepthRange, num_samples: usize) -> ConfigResult<Self> {
        range.validate()?;
        require_samples(MIN_DEPTH_SAMPLES, num_samples)?;
        Ok(Self {
            depths_mm: range.samples(num_samples),
        })
    }

    /// Sampled depths in millimeters, ascending
    pub fn depths_mm(&self) -> &[f64] {
        &self.depths_mm
    }
}

/// Overlap and precision at one depth for one baseline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthSample {
    /// Depth in millimeters
    pub z_mm: f64,

    /// Area seen by both cameras at this depth (mm²)
    pub overlap_area_mm2: f64,

    /// Depth standard deviation at this depth (mm)
    pub sigma_z_mm: f64,
}

impl DepthSample {
    /// Evaluate overlap and depth uncertainty at `z_mm`
    pub fn evaluate(
        b_mm: f64,
        z_mm: f64,
        optics: &CameraOptics,
        uncertainty: &UncertaintyParams,
    ) -> Self {
        Self {
            z_mm,
            overlap_area_mm2: overlap_area(b_mm, z_mm, optics),
            sigma_z_mm: depth_sigma(b_mm, z_mm, optics.focal_length_px, uncertainty.sigma_d_px),
        }
    }

    /// Overlap area if the depth meets the precision requirement, else 0
    pub fn resolvable_area_mm2(&self, uncertainty: &UncertaintyParams) -> f64 {
        if uncertainty.is_resolvable(self.sigma_z_mm) {
            self.overlap_area_mm2
        } else {
            0.0
        }
    }
}

/// Area (mm²) seen by both cameras at depth `z_mm` for baseline `b_mm`.
///
/// Zero once the baseline reaches the width of a single camera's view.
pub fn overlap_area(b_mm: f64, z_mm: f64, optics: &CameraOptics) -> f64 {
    let (width, height) = optics.footprint(z_mm);
    let overlap_width = (width - b_mm).max(0.0);
    overlap_width * height
}

/// Per-depth samples for one baseline, in grid order
pub fn depth_samples(
    b_mm: f64,
    optics: &CameraOptics,
    uncertainty: &UncertaintyParams,
    grid: &DepthGrid,
) -> Vec<DepthSample> {
    grid.depths_mm()
        .iter()
        .map(|&z| DepthSample::evaluate(b_mm, z, optics, uncertainty))
        .collect()
}

/// Resolvable volume (mm³) for one baseline over a prebuilt depth grid.
///
/// Inputs are assumed validated; see [`resolvable_volume`] for the checked
/// entry point.
pub fn resolvable_volume_on(
    b_mm: f64,
    optics: &CameraOptics,
    uncertainty: &UncertaintyParams,
    grid: &DepthGrid,
) -> f64 {
    let areas: Vec<f64> = grid
        .depths_mm()
        .iter()
        .map(|&z| DepthSample::evaluate(b_mm, z, optics, uncertainty).resolvable_area_mm2(uncertainty))
        .collect();
    trapezoid(&areas, grid.depths_mm())
}

/// Resolvable workspace volume (mm³) for a single baseline.
///
/// Validates every input, discretizes the depth range into `num_samples`
/// points and integrates the masked overlap area. Returns `Ok(0.0)` when no
/// depth meets the precision requirement.
pub fn resolvable_volume(
    b_mm: f64,
    camera: &CameraSpec,
    uncertainty: &UncertaintyParams,
    depth_range: &DepthRange,
    num_samples: usize,
) -> ConfigResult<f64> {
    require_non_negative("baseline_mm", b_mm)?;
    camera.validate()?;
    uncertainty.validate()?;
    let grid = DepthGrid::new(depth_range, num_samples)?;

    Ok(resolvable_volume_on(b_mm, &camera.optics(), uncertainty, &grid))
}
