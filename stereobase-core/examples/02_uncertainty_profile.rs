//! Depth Uncertainty at a Fixed Baseline
//!
//! Shows how depth precision degrades across the working range for the
//! 148 mm prototype baseline and an optimistic 0.5 px disparity noise.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_uncertainty_profile
//! ```

use stereobase_core::{
    constants::{
        requirements::{PROFILE_BASELINE_MM, PROFILE_SIGMA_D_PX},
        sampling::DEFAULT_PROFILE_SAMPLES,
    },
    ConfigError, RigConfig,
};

fn main() -> Result<(), ConfigError> {
    let config = RigConfig::default();
    let profile = config.profile(PROFILE_BASELINE_MM, PROFILE_SIGMA_D_PX, DEFAULT_PROFILE_SAMPLES)?;

    println!(
        "b = {} mm, sigma_d = {} px\n",
        profile.baseline_mm, profile.sigma_d_px
    );
    println!("{:>10}  {:>12}", "Z (mm)", "sigma_Z (mm)");
    for point in profile.points.iter().step_by(DEFAULT_PROFILE_SAMPLES / 16) {
        println!("{:>10.1}  {:>12.4}", point.z_mm, point.sigma_z_mm);
    }

    let requirement = config.uncertainty.sigma_z_max_mm;
    match profile.max_resolvable_depth(requirement) {
        Some(z) => println!(
            "\nsigma_Z <= {} mm holds up to Z = {:.1} mm (closed form {:.1} mm)",
            requirement,
            z,
            profile.analytic_max_depth(requirement)
        ),
        None => println!("\nsigma_Z <= {} mm is not met anywhere in range", requirement),
    }
    Ok(())
}
