//! Camera geometry model
//!
//! Turns the hardware description of one camera into angular fields of view,
//! and angles into linear scene extents at a given depth.
//!
//! ```text
//!            sensor_width / 2
//!   θ/2 = atan( ---------------- )
//!               focal_length
//!
//!   extent(Z) = 2 · Z · tan(θ/2)
//! ```
//!
//! Both cameras of the rig are assumed identical, so one [`CameraOptics`]
//! describes the pair.

use core::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::optics::{
        REFERENCE_FOCAL_LENGTH_MM, REFERENCE_PIXEL_PITCH_MM,
        REFERENCE_SENSOR_RES_X_PX, REFERENCE_SENSOR_RES_Y_PX,
    },
    errors::{require_positive, ConfigError, ConfigResult},
    traits::Validate,
};

/// Linear field-of-view extent (mm) at depth `z_mm` for full angle `theta_rad`.
///
/// Valid for `z_mm >= 0` and `0 < theta_rad < π`. Zero at `z_mm = 0`.
pub fn field_of_view(z_mm: f64, theta_rad: f64) -> f64 {
    2.0 * z_mm * libm::tan(theta_rad / 2.0)
}

/// Full view angle (rad) subtended by a sensor dimension behind a lens.
pub fn view_angle(sensor_extent_mm: f64, focal_length_mm: f64) -> f64 {
    2.0 * libm::atan(sensor_extent_mm / (2.0 * focal_length_mm))
}

/// Hardware description of one camera
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraSpec {
    /// Lens focal length in millimeters
    pub focal_length_mm: f64,

    /// Pixels per sensor row
    pub sensor_res_x_px: f64,

    /// Pixels per sensor column
    pub sensor_res_y_px: f64,

    /// Center-to-center pixel distance in millimeters
    pub pixel_pitch_mm: f64,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            focal_length_mm: REFERENCE_FOCAL_LENGTH_MM,
            sensor_res_x_px: REFERENCE_SENSOR_RES_X_PX,
            sensor_res_y_px: REFERENCE_SENSOR_RES_Y_PX,
            pixel_pitch_mm: REFERENCE_PIXEL_PITCH_MM,
        }
    }
}

impl CameraSpec {
    /// Create a camera description
    pub fn new(
        focal_length_mm: f64,
        sensor_res_x_px: f64,
        sensor_res_y_px: f64,
        pixel_pitch_mm: f64,
    ) -> Self {
        Self {
            focal_length_mm,
            sensor_res_x_px,
            sensor_res_y_px,
            pixel_pitch_mm,
        }
    }

    /// Focal length expressed in pixels
    pub fn focal_length_px(&self) -> f64 {
        self.focal_length_mm / self.pixel_pitch_mm
    }

    /// Physical sensor width in millimeters
    pub fn sensor_width_mm(&self) -> f64 {
        self.sensor_res_x_px * self.pixel_pitch_mm
    }

    /// Physical sensor height in millimeters
    pub fn sensor_height_mm(&self) -> f64 {
        self.sensor_res_y_px * self.pixel_pitch_mm
    }

    /// Derive the optics used by the rest of the model
    pub fn optics(&self) -> CameraOptics {
        CameraOptics {
            focal_length_px: self.focal_length_px(),
            fov_x_rad: view_angle(self.sensor_width_mm(), self.focal_length_mm),
            fov_y_rad: view_angle(self.sensor_height_mm(), self.focal_length_mm),
        }
    }
}

impl Validate for CameraSpec {
    fn validate(&self) -> ConfigResult<()> {
        require_positive("focal_length_mm", self.focal_length_mm)?;
        require_positive("sensor_res_x_px", self.sensor_res_x_px)?;
        require_positive("sensor_res_y_px", self.sensor_res_y_px)?;
        require_positive("pixel_pitch_mm", self.pixel_pitch_mm)?;
        self.optics().validate()
    }
}

/// Optics derived from a [`CameraSpec`], computed once and reused
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraOptics {
    /// Focal length in pixel units
    pub focal_length_px: f64,

    /// Horizontal full view angle in radians
    pub fov_x_rad: f64,

    /// Vertical full view angle in radians
    pub fov_y_rad: f64,
}

impl CameraOptics {
    /// Width and height (mm) of one camera's view at depth `z_mm`
    pub fn footprint(&self, z_mm: f64) -> (f64, f64) {
        (
            field_of_view(z_mm, self.fov_x_rad),
            field_of_view(z_mm, self.fov_y_rad),
        )
    }
}

impl Validate for CameraOptics {
    fn validate(&self) -> ConfigResult<()> {
        require_positive("focal_length_px", self.focal_length_px)?;
        for angle in [self.fov_x_rad, self.fov_y_rad] {
            // atan keeps these inside (0, π) unless the inputs were degenerate
            if !(angle > 0.0 && angle < PI) {
                return Err(ConfigError::AngleOutOfDomain { value: angle });
            }
        }
        Ok(())
    }
}
