//! Plain-text and JSON rendering of results

use anyhow::Result;
use serde::Serialize;
use stereobase_core::{RigConfig, SweepResult, UncertaintyProfile};

/// Pretty JSON for any serializable result
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Summary of a baseline sweep
pub fn sweep_summary(config: &RigConfig, result: &SweepResult) -> String {
    let mut out = format!(
        "Baselines: {} candidates in [{}, {}] mm\n\
         Requirement: sigma_Z <= {} mm over Z in [{}, {}] mm\n",
        result.samples.len(),
        config.baseline_range.b_min_mm,
        config.baseline_range.b_max_mm,
        config.uncertainty.sigma_z_max_mm,
        config.depth_range.z_min_mm,
        config.depth_range.z_max_mm
    );
    if result.has_resolvable_volume() {
        out.push_str(&format!(
            "Optimal baseline (mm): {:.3}\nMax resolvable volume (mm^3): {:.6e}\n",
            result.optimum.baseline_mm, result.optimum.volume_mm3
        ));
    } else {
        out.push_str("No baseline in range meets the precision requirement\n");
    }
    out
}

/// Summary of a fixed-baseline uncertainty profile
pub fn profile_summary(config: &RigConfig, profile: &UncertaintyProfile) -> String {
    let sigma_z_max_mm = config.uncertainty.sigma_z_max_mm;
    let mut out = format!(
        "Baseline {} mm, sigma_d {} px, {} depths over {} mm\n",
        profile.baseline_mm,
        profile.sigma_d_px,
        profile.points.len(),
        config.depth_range.span_mm()
    );
    if let (Some(near), Some(worst)) = (profile.points.first(), profile.worst_sigma_mm()) {
        out.push_str(&format!(
            "sigma_Z: {:.4} mm at {:.1} mm -> {:.4} mm at {:.1} mm\n",
            near.sigma_z_mm, near.z_mm, worst, config.depth_range.z_max_mm
        ));
    }
    match profile.max_resolvable_depth(sigma_z_max_mm) {
        Some(z) => out.push_str(&format!("sigma_Z <= {} mm up to Z = {:.1} mm\n", sigma_z_max_mm, z)),
        None => out.push_str(&format!("sigma_Z <= {} mm not met at any depth\n", sigma_z_max_mm)),
    }
    out
}
