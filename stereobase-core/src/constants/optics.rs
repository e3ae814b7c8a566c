//! Optical Constants for the Reference Rig
//!
//! Values describe the camera module the baseline study was first run for:
//! a 3 mm lens in front of a 1600×1200 global-shutter sensor with 3 µm pixels.

/// Lens focal length (mm).
///
/// Fixed-focus M12 lens of the reference camera module.
///
/// Source: StellarHD camera module documentation
pub const REFERENCE_FOCAL_LENGTH_MM: f64 = 3.0;

/// Active pixels per sensor row.
///
/// Source: OG02B1B sensor datasheet
pub const REFERENCE_SENSOR_RES_X_PX: f64 = 1600.0;

/// Active pixels per sensor column.
///
/// Source: OG02B1B sensor datasheet
pub const REFERENCE_SENSOR_RES_Y_PX: f64 = 1200.0;

/// Center-to-center pixel distance (mm).
///
/// 3 µm square pixels. Together with the focal length this gives a focal
/// length of 1000 px.
///
/// Source: OG02B1B sensor datasheet
pub const REFERENCE_PIXEL_PITCH_MM: f64 = 0.003;
