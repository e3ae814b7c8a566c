//! Depth-uncertainty model
//!
//! Stereo triangulation recovers depth as `Z = f·b / d`. Differentiating with
//! respect to the disparity `d` and scaling by the disparity noise gives the
//! first-order depth standard deviation:
//!
//! ```text
//!            Z²
//!   σZ = ---------- · σd
//!          f_px · b
//! ```
//!
//! Uncertainty grows with the square of depth and shrinks with baseline. That
//! trade-off against shrinking view overlap is what the baseline sweep
//! balances.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        requirements::{REFERENCE_SIGMA_D_PX, REFERENCE_SIGMA_Z_MAX_MM},
        sampling::MIN_BASELINE_MM,
    },
    errors::{require_positive, ConfigResult},
    traits::Validate,
};

/// Standard deviation of triangulated depth (mm).
///
/// The baseline is floored at [`MIN_BASELINE_MM`] so the function stays
/// finite for every input.
pub fn depth_sigma(b_mm: f64, z_mm: f64, f_px: f64, sigma_d_px: f64) -> f64 {
    let b_mm = b_mm.max(MIN_BASELINE_MM);
    (z_mm * z_mm / (f_px * b_mm)) * sigma_d_px
}

/// Deepest depth (mm) at which `depth_sigma` stays within `sigma_z_max_mm`.
///
/// Closed-form inverse of [`depth_sigma`] in `Z`. Infinite when the
/// disparity noise is zero.
pub fn max_depth_for_sigma(b_mm: f64, f_px: f64, sigma_d_px: f64, sigma_z_max_mm: f64) -> f64 {
    if sigma_d_px <= 0.0 {
        return f64::INFINITY;
    }
    let b_mm = b_mm.max(MIN_BASELINE_MM);
    libm::sqrt(sigma_z_max_mm * f_px * b_mm / sigma_d_px)
}

/// Disparity noise and the precision the rig must reach
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UncertaintyParams {
    /// Disparity noise, one standard deviation in pixels
    pub sigma_d_px: f64,

    /// Largest tolerable depth standard deviation in millimeters
    pub sigma_z_max_mm: f64,
}

impl Default for UncertaintyParams {
    fn default() -> Self {
        Self {
            sigma_d_px: REFERENCE_SIGMA_D_PX,
            sigma_z_max_mm: REFERENCE_SIGMA_Z_MAX_MM,
        }
    }
}

impl UncertaintyParams {
    /// Create uncertainty parameters
    pub fn new(sigma_d_px: f64, sigma_z_max_mm: f64) -> Self {
        Self { sigma_d_px, sigma_z_max_mm }
    }

    /// Whether a depth standard deviation meets the requirement
    pub fn is_resolvable(&self, sigma_z_mm: f64) -> bool {
        sigma_z_mm <= self.sigma_z_max_mm
    }
}

impl Validate for UncertaintyParams {
    fn validate(&self) -> ConfigResult<()> {
        require_positive("sigma_d_px", self.sigma_d_px)?;
        require_positive("sigma_z_max_mm", self.sigma_z_max_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    const F_PX: f64 = 1000.0;

    #[test]
    fn reference_value() {
        // 200² / (1000 · 100) · 1.0 = 0.4 mm
        assert!((depth_sigma(100.0, 200.0, F_PX, 1.0) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn zero_noise_gives_zero_sigma() {
        assert_eq!(depth_sigma(100.0, 500.0, F_PX, 0.0), 0.0);
    }

    #[test]
    fn zero_baseline_stays_finite() {
        let sigma = depth_sigma(0.0, 100.0, F_PX, 1.0);
        assert!(sigma.is_finite());
        assert!(sigma > 1e6);

        let negative = depth_sigma(-5.0, 100.0, F_PX, 1.0);
        assert_eq!(negative, sigma);
    }

    #[test]
    fn quadratic_in_depth() {
        let near = depth_sigma(100.0, 150.0, F_PX, 1.0);
        let far = depth_sigma(100.0, 300.0, F_PX, 1.0);
        assert!((far / near - 4.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_in_baseline() {
        let narrow = depth_sigma(50.0, 300.0, F_PX, 1.0);
        let wide = depth_sigma(100.0, 300.0, F_PX, 1.0);
        assert!((narrow / wide - 2.0).abs() < 1e-12);
    }

    #[test]
    fn max_depth_inverts_sigma() {
        let z = max_depth_for_sigma(148.0, F_PX, 0.5, 1.0);
        assert!((depth_sigma(148.0, z, F_PX, 0.5) - 1.0).abs() < 1e-9);
        assert_eq!(max_depth_for_sigma(148.0, F_PX, 0.0, 1.0), f64::INFINITY);
    }

    #[test]
    fn requirement_check() {
        let params = UncertaintyParams::default();
        assert!(params.is_resolvable(1.0));
        assert!(!params.is_resolvable(1.0001));
        assert!(params.validate().is_ok());

        let bad = UncertaintyParams::new(1.0, 0.0);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::NonPositive { field: "sigma_z_max_mm", .. })
        ));
    }
}
