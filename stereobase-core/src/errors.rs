//! Error Types for Rig Configuration Failures
//!
//! ## Design Philosophy
//!
//! Every computation in this crate is a pure numeric pass, so the only thing
//! that can go wrong is the configuration handed in. Errors are therefore:
//!
//! 1. **Small and Copy**: field names are `&'static str`, values are inline.
//!    No heap allocation, works the same with and without `std`.
//!
//! 2. **Raised at Entry**: the volume integrator, the sweep and the profile
//!    check their inputs before doing any work. A silent zero volume would be
//!    indistinguishable from "no baseline meets the precision requirement",
//!    which is a meaningful answer.
//!
//! 3. **Actionable**: each variant names the offending field so the caller
//!    can point at the exact entry in a config file.
//!
//! ## Error Categories
//!
//! ### Parameter Violations
//! - `NonPositive`: focal length, pixel pitch, depth or baseline ≤ 0
//! - `Negative`: a candidate baseline below zero
//! - `NotFinite`: NaN or infinity in any parameter
//!
//! ### Range Violations
//! - `EmptyRange`: `z_min >= z_max`, or `b_min > b_max`
//! - `TooFewSamples`: a grid cannot be built from the requested sample count
//!
//! ### Derived Geometry
//! - `AngleOutOfDomain`: a derived field-of-view angle fell outside (0, π)
//!
//! ## Handling Strategy
//!
//! ```rust
//! use stereobase_core::{ConfigError, RigConfig};
//!
//! let mut config = RigConfig::default();
//! config.depth_range.z_min_mm = 700.0;
//!
//! match config.optimize() {
//!     Ok(result) => println!("b_opt = {} mm", result.optimum.baseline_mm),
//!     Err(ConfigError::EmptyRange { field, min, max }) => {
//!         eprintln!("{field}: [{min}, {max}] is empty");
//!     }
//!     Err(e) => eprintln!("bad config: {e}"),
//! }
//! ```

use thiserror_no_std::Error;

use crate::traits::Validatable;

/// Result type for configuration-checked operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Parameter must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending parameter
        field: &'static str,
        /// The value that was supplied
        value: f64,
    },

    /// Parameter must not be negative
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending parameter
        field: &'static str,
        /// The value that was supplied
        value: f64,
    },

    /// Parameter is NaN or infinite
    #[error("{field} is not a finite number")]
    NotFinite {
        /// Name of the offending parameter
        field: &'static str,
    },

    /// Lower bound is not below the upper bound
    #[error("{field} range [{min}, {max}] is empty")]
    EmptyRange {
        /// Name of the offending range
        field: &'static str,
        /// Lower bound as supplied
        min: f64,
        /// Upper bound as supplied
        max: f64,
    },

    /// Sample grid would be too coarse to evaluate
    #[error("Too few samples: need {required}, have {available}")]
    TooFewSamples {
        /// Minimum number of grid points for the operation
        required: usize,
        /// Number of grid points requested
        available: usize,
    },

    /// Derived field-of-view angle is not in (0, π)
    #[error("Field-of-view angle {value} rad outside (0, π)")]
    AngleOutOfDomain {
        /// The derived angle in radians
        value: f64,
    },
}

/// Check that `value` is finite and strictly positive
pub(crate) fn require_positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_valid() {
        Err(ConfigError::NotFinite { field })
    } else if value <= 0.0 {
        Err(ConfigError::NonPositive { field, value })
    } else {
        Ok(())
    }
}

/// Check that `value` is finite and not negative
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> ConfigResult<()> {
    if !value.is_valid() {
        Err(ConfigError::NotFinite { field })
    } else if value < 0.0 {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(())
    }
}

/// Check that a sample count reaches the grid minimum
pub(crate) fn require_samples(required: usize, available: usize) -> ConfigResult<()> {
    if available < required {
        Err(ConfigError::TooFewSamples { required, available })
    } else {
        Ok(())
    }
}
