//! Core traits for configuration records
//!
//! Every input record checks itself before the model touches it.
//! Keep them simple - the records are plain numbers.

use crate::errors::ConfigResult;

/// Input record that can verify its own invariants
pub trait Validate {
    /// Check every invariant of the record, reporting the first violation
    fn validate(&self) -> ConfigResult<()>;
}

/// Trait for values that can be checked for numeric sanity
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
