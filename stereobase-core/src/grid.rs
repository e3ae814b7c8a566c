//! Sampling grids and numerical integration
//!
//! The model discretizes two axes: depth (for the volume integral) and
//! baseline (for the sweep). Both use the same inclusive, evenly spaced grid:
//!
//! ```text
//!   x_i = min + i · (max - min) / (n - 1),   i = 0 ..= n-1
//! ```
//!
//! with the last point pinned to `max` so floating-point drift never moves
//! the grid past the configured bound.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::requirements::{
        REFERENCE_B_MAX_MM, REFERENCE_B_MIN_MM, REFERENCE_Z_MAX_MM, REFERENCE_Z_MIN_MM,
    },
    errors::{require_positive, ConfigError, ConfigResult},
    traits::Validate,
};

/// `n` evenly spaced values over `[start, stop]`, both ends included.
///
/// `n = 0` gives an empty grid, `n = 1` gives `[start]`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => {
            let mut grid = Vec::with_capacity(1);
            grid.push(start);
            grid
        }
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = stop;
            grid
        }
    }
}

/// Trapezoidal integral of `y` sampled at `x`.
///
/// Uses the shorter of the two slices; fewer than two points integrate to 0.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    y.windows(2)
        .zip(x.windows(2))
        .map(|(yw, xw)| 0.5 * (yw[0] + yw[1]) * (xw[1] - xw[0]))
        .sum()
}

/// Depth interval that must be resolved
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthRange {
    /// Nearest depth in millimeters (lens near-focus limit)
    pub z_min_mm: f64,

    /// Farthest depth in millimeters (scene limit)
    pub z_max_mm: f64,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            z_min_mm: REFERENCE_Z_MIN_MM,
            z_max_mm: REFERENCE_Z_MAX_MM,
        }
    }
}

impl DepthRange {
    /// Create a depth range
    pub fn new(z_min_mm: f64, z_max_mm: f64) -> Self {
        Self { z_min_mm, z_max_mm }
    }

    /// Length of the interval in millimeters
    pub fn span_mm(&self) -> f64 {
        self.z_max_mm - self.z_min_mm
    }

    /// Evenly spaced depths over the range
    pub fn samples(&self, n: usize) -> Vec<f64> {
        linspace(self.z_min_mm, self.z_max_mm, n)
    }
}

impl Validate for DepthRange {
    fn validate(&self) -> ConfigResult<()> {
        require_positive("z_min_mm", self.z_min_mm)?;
        require_positive("z_max_mm", self.z_max_mm)?;
        if self.z_min_mm >= self.z_max_mm {
            return Err(ConfigError::EmptyRange {
                field: "depth_range",
                min: self.z_min_mm,
                max: self.z_max_mm,
            });
        }
        Ok(())
    }
}

/// Candidate baselines for the sweep
///
/// Unlike [`DepthRange`], a single point `[b, b]` is allowed: the sweep then
/// just evaluates that baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaselineRange {
    /// Smallest baseline in millimeters
    pub b_min_mm: f64,

    /// Largest baseline in millimeters
    pub b_max_mm: f64,
}

impl Default for BaselineRange {
    fn default() -> Self {
        Self {
            b_min_mm: REFERENCE_B_MIN_MM,
            b_max_mm: REFERENCE_B_MAX_MM,
        }
    }
}

impl BaselineRange {
    /// Create a baseline range
    pub fn new(b_min_mm: f64, b_max_mm: f64) -> Self {
        Self { b_min_mm, b_max_mm }
    }

    /// Range holding exactly one baseline
    pub fn single(b_mm: f64) -> Self {
        Self::new(b_mm, b_mm)
    }

    /// Evenly spaced baselines over the range
    pub fn samples(&self, n: usize) -> Vec<f64> {
        linspace(self.b_min_mm, self.b_max_mm, n)
    }
}

impl Validate for BaselineRange {
    fn validate(&self) -> ConfigResult<()> {
        require_positive("b_min_mm", self.b_min_mm)?;
        require_positive("b_max_mm", self.b_max_mm)?;
        if self.b_min_mm > self.b_max_mm {
            return Err(ConfigError::EmptyRange {
                field: "baseline_range",
                min: self.b_min_mm,
                max: self.b_max_mm,
            });
        }
        Ok(())
    }
}
