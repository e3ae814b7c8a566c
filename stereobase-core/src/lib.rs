//! Core model for stereo baseline optimization
//!
//! Chooses the separation between two identical cameras that maximizes the
//! 3-D workspace both can see while still triangulating depth precisely
//! enough. Intended for design time, before the rig is built.
//!
//! Data flows one way:
//!
//! ```text
//! CameraSpec ──▶ geometry ──▶ uncertainty ──▶ volume ──▶ sweep ──▶ SweepResult
//! ```
//!
//! Every operation is a pure function of its inputs. Configuration is checked
//! at the entry of `resolvable_volume`, `optimize_baseline` and
//! `uncertainty_profile`; the raw formulas are total and never fail.
//!
//! ```no_run
//! use stereobase_core::RigConfig;
//!
//! let result = RigConfig::default().optimize()?;
//! println!(
//!     "Optimal baseline {:.1} mm, volume {:.3e} mm^3",
//!     result.optimum.baseline_mm,
//!     result.optimum.volume_mm3
//! );
//! # Ok::<(), stereobase_core::ConfigError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod profile;
pub mod sweep;
pub mod traits;
pub mod uncertainty;
pub mod volume;

// Public API
pub use config::RigConfig;
pub use errors::{ConfigError, ConfigResult};
pub use geometry::{field_of_view, CameraOptics, CameraSpec};
pub use grid::{BaselineRange, DepthRange};
pub use profile::{uncertainty_profile, ProfilePoint, UncertaintyProfile};
pub use sweep::{optimize_baseline, SweepResult, SweepSample};
pub use traits::Validate;
pub use uncertainty::{depth_sigma, max_depth_for_sigma, UncertaintyParams};
pub use volume::{resolvable_volume, DepthGrid, DepthSample};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
