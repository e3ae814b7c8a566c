//! Constants for Stereobase Core
//!
//! Centralized reference values for the stereo rig model. Every number used as
//! a default or a numeric guard lives here, with its unit in the name.
//!
//! ## Organization
//!
//! - **Optics**: camera module and sensor characteristics
//! - **Requirements**: precision target and the depth/baseline search space
//! - **Sampling**: grid sizes and numeric guards
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Name constants with their unit suffix (`_MM`, `_PX`, `_RAD`)
//! 3. Note the datasheet or physical reasoning behind each value

/// Camera module and sensor characteristics of the reference rig.
pub mod optics;

/// Precision requirement and search ranges of the reference rig.
pub mod requirements;

/// Sample counts and numeric guards.
pub mod sampling;

// Re-export commonly used constants for convenience
pub use optics::{
    REFERENCE_FOCAL_LENGTH_MM, REFERENCE_PIXEL_PITCH_MM,
    REFERENCE_SENSOR_RES_X_PX, REFERENCE_SENSOR_RES_Y_PX,
};

pub use requirements::{
    REFERENCE_SIGMA_D_PX, REFERENCE_SIGMA_Z_MAX_MM,
    REFERENCE_Z_MIN_MM, REFERENCE_Z_MAX_MM,
    REFERENCE_B_MIN_MM, REFERENCE_B_MAX_MM,
};

pub use sampling::{
    DEFAULT_NUM_SAMPLES, MIN_BASELINE_MM,
    MIN_DEPTH_SAMPLES, MIN_BASELINE_SAMPLES,
};
