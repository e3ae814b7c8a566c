//! Reference Rig Baseline Study
//!
//! Runs the baseline sweep on the reference underwater rig and prints the
//! optimum together with a coarse view of the volume curve.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --release --example 01_reference_rig
//! ```

use stereobase_core::{ConfigError, RigConfig};

fn main() -> Result<(), ConfigError> {
    println!("Stereo Baseline Study: Reference Rig");
    println!("====================================\n");

    let config = RigConfig::default();
    let optics = config.camera.optics();

    println!("Camera:");
    println!("  Focal length: {} mm ({:.0} px)", config.camera.focal_length_mm, optics.focal_length_px);
    println!("  FOV: {:.1}° x {:.1}°", optics.fov_x_rad.to_degrees(), optics.fov_y_rad.to_degrees());
    println!("Requirement:");
    println!("  sigma_d = {} px, sigma_Z <= {} mm", config.uncertainty.sigma_d_px, config.uncertainty.sigma_z_max_mm);
    println!("  Z in [{}, {}] mm", config.depth_range.z_min_mm, config.depth_range.z_max_mm);
    println!();

    let result = config.optimize()?;

    // Every 10% of the curve
    let stride = (result.samples.len() / 10).max(1);
    println!("{:>12}  {:>16}", "b (mm)", "V (mm^3)");
    for sample in result.samples.iter().step_by(stride) {
        println!("{:>12.1}  {:>16.4e}", sample.baseline_mm, sample.volume_mm3);
    }

    println!("\n{}", "=".repeat(40));
    println!("Optimal baseline (mm): {:.3}", result.optimum.baseline_mm);
    println!("Max resolvable volume (mm^3): {:.4e}", result.optimum.volume_mm3);
    Ok(())
}
