//! Baseline sweep and selector
//!
//! Evaluates the overlap-volume integrator over an even grid of candidate
//! baselines and picks the largest volume.
//!
//! ## Why a Grid Search
//!
//! The objective `V(b)` has a kink wherever the precision mask starts or
//! stops cutting depths, so its derivative jumps and gradient methods wander.
//! A dense 1-D grid costs `n_b · n_z` formula evaluations and always finds the
//! grid maximum.
//!
//! ## Tie-break
//!
//! Among equal maxima the first grid point wins, i.e. the smallest baseline.
//!
//! ## Parallelism
//!
//! Candidates are independent. With the `parallel` feature they are
//! evaluated through rayon; results are collected back in grid order before
//! selection, so the outcome is identical to the sequential path.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sampling::MIN_BASELINE_SAMPLES,
    errors::{require_samples, ConfigError, ConfigResult},
    geometry::{CameraOptics, CameraSpec},
    grid::{BaselineRange, DepthRange},
    traits::Validate,
    uncertainty::UncertaintyParams,
    volume::{resolvable_volume_on, DepthGrid},
};

/// One evaluated candidate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepSample {
    /// Candidate baseline in millimeters
    pub baseline_mm: f64,

    /// Resolvable workspace volume in cubic millimeters
    pub volume_mm3: f64,
}

/// Full sweep curve plus the selected optimum
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepResult {
    /// Candidates in ascending baseline order
    pub samples: Vec<SweepSample>,

    /// Largest volume, smallest baseline among ties
    pub optimum: SweepSample,
}

impl SweepResult {
    /// Select the optimum from evaluated samples.
    ///
    /// Returns `None` for an empty curve.
    pub fn from_samples(samples: Vec<SweepSample>) -> Option<Self> {
        let mut iter = samples.iter();
        let mut best = *iter.next()?;
        for sample in iter {
            // Strict comparison keeps the first maximum
            if sample.volume_mm3 > best.volume_mm3 {
                best = *sample;
            }
        }
        Some(Self { samples, optimum: best })
    }

    /// Candidate baselines in grid order
    pub fn baselines(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.baseline_mm)
    }

    /// Volumes in grid order
    pub fn volumes(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.volume_mm3)
    }

    /// Whether any candidate resolves a non-empty workspace
    pub fn has_resolvable_volume(&self) -> bool {
        self.optimum.volume_mm3 > 0.0
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_candidates(
    baselines: Vec<f64>,
    optics: &CameraOptics,
    uncertainty: &UncertaintyParams,
    grid: &DepthGrid,
) -> Vec<SweepSample> {
    baselines
        .into_iter()
        .map(|b| SweepSample {
            baseline_mm: b,
            volume_mm3: resolvable_volume_on(b, optics, uncertainty, grid),
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_candidates(
    baselines: Vec<f64>,
    optics: &CameraOptics,
    uncertainty: &UncertaintyParams,
    grid: &DepthGrid,
) -> Vec<SweepSample> {
    use rayon::prelude::*;

    baselines
        .into_par_iter()
        .map(|b| SweepSample {
            baseline_mm: b,
            volume_mm3: resolvable_volume_on(b, optics, uncertainty, grid),
        })
        .collect()
}

/// Find the baseline that maximizes resolvable volume.
///
/// Both the baseline grid and the depth grid use `num_samples` points. The
/// depth grid is built once and shared by every candidate.
pub fn optimize_baseline(
    baseline_range: &BaselineRange,
    camera: &CameraSpec,
    uncertainty: &UncertaintyParams,
    depth_range: &DepthRange,
    num_samples: usize,
) -> ConfigResult<SweepResult> {
    baseline_range.validate()?;
    camera.validate()?;
    uncertainty.validate()?;
    require_samples(MIN_BASELINE_SAMPLES, num_samples)?;
    let grid = DepthGrid::new(depth_range, num_samples)?;

    let samples = evaluate_candidates(
        baseline_range.samples(num_samples),
        &camera.optics(),
        uncertainty,
        &grid,
    );

    let result = SweepResult::from_samples(samples).ok_or(ConfigError::TooFewSamples {
        required: MIN_BASELINE_SAMPLES,
        available: 0,
    })?;

    log_debug!(
        "Baseline sweep over {} candidates: b_opt = {:.3} mm, V_max = {:.1} mm^3",
        result.samples.len(),
        result.optimum.baseline_mm,
        result.optimum.volume_mm3
    );
    if !result.has_resolvable_volume() {
        log_warn!(
            "No baseline in [{}, {}] mm reaches sigma_Z <= {} mm",
            baseline_range.b_min_mm,
            baseline_range.b_max_mm,
            uncertainty.sigma_z_max_mm
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volume::resolvable_volume;

    fn sample(b: f64, v: f64) -> SweepSample {
        SweepSample { baseline_mm: b, volume_mm3: v }
    }

    #[test]
    fn first_maximum_wins() {
        let result = SweepResult::from_samples(vec![
            sample(50.0, 1.0),
            sample(60.0, 3.0),
            sample(70.0, 3.0),
            sample(80.0, 2.0),
        ])
        .unwrap();
        assert_eq!(result.optimum, sample(60.0, 3.0));
    }

    #[test]
    fn empty_curve_has_no_optimum() {
        assert!(SweepResult::from_samples(Vec::new()).is_none());
    }

    #[test]
    fn all_zero_selects_smallest_baseline() {
        let result = SweepResult::from_samples(vec![sample(50.0, 0.0), sample(60.0, 0.0)]).unwrap();
        assert_eq!(result.optimum.baseline_mm, 50.0);
        assert!(!result.has_resolvable_volume());
    }

    #[test]
    fn single_point_range() {
        let camera = CameraSpec::default();
        let params = UncertaintyParams::default();
        let depths = DepthRange::default();

        let result =
            optimize_baseline(&BaselineRange::single(148.0), &camera, &params, &depths, 500).unwrap();
        let expected = resolvable_volume(148.0, &camera, &params, &depths, 500).unwrap();

        assert_eq!(result.optimum.baseline_mm, 148.0);
        assert_eq!(result.optimum.volume_mm3, expected);
        assert!(result.baselines().all(|b| b == 148.0));
    }

    #[test]
    fn curve_is_in_grid_order() {
        let result = optimize_baseline(
            &BaselineRange::default(),
            &CameraSpec::default(),
            &UncertaintyParams::default(),
            &DepthRange::default(),
            50,
        )
        .unwrap();
        assert_eq!(result.samples.len(), 50);
        assert!(result.baselines().zip(result.baselines().skip(1)).all(|(a, b)| a < b));
        assert_eq!(result.volumes().count(), 50);
    }

    #[cfg(feature = "parallel")]
    fn sequential_curve(
        baselines: &[f64],
        optics: &CameraOptics,
        params: &UncertaintyParams,
        grid: &DepthGrid,
    ) -> Vec<SweepSample> {
        baselines
            .iter()
            .map(|&b| sample(b, resolvable_volume_on(b, optics, params, grid)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn assert_bit_identical(a: &[SweepSample], b: &[SweepSample]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert_eq!(x.baseline_mm.to_bits(), y.baseline_mm.to_bits());
            assert_eq!(x.volume_mm3.to_bits(), y.volume_mm3.to_bits());
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn rayon_curve_matches_sequential() {
        let optics = CameraSpec::default().optics();
        let params = UncertaintyParams::default();
        let grid = DepthGrid::new(&DepthRange::default(), 400).unwrap();
        let baselines = BaselineRange::default().samples(400);

        let expected = sequential_curve(&baselines, &optics, &params, &grid);
        let curve = evaluate_candidates(baselines, &optics, &params, &grid);
        assert_bit_identical(&curve, &expected);

        let result = optimize_baseline(
            &BaselineRange::default(),
            &CameraSpec::default(),
            &params,
            &DepthRange::default(),
            400,
        )
        .unwrap();
        assert_bit_identical(&result.samples, &expected);
        assert_eq!(result.optimum, SweepResult::from_samples(expected).unwrap().optimum);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn rayon_ties_keep_smallest_baseline() {
        // Unreachable precision: every candidate scores zero
        let params = UncertaintyParams::new(1.0, 1e-6);
        let optics = CameraSpec::default().optics();
        let grid = DepthGrid::new(&DepthRange::default(), 200).unwrap();
        let baselines = BaselineRange::default().samples(200);

        let expected = sequential_curve(&baselines, &optics, &params, &grid);
        let curve = evaluate_candidates(baselines, &optics, &params, &grid);
        assert_bit_identical(&curve, &expected);

        let result = optimize_baseline(
            &BaselineRange::default(),
            &CameraSpec::default(),
            &params,
            &DepthRange::default(),
            200,
        )
        .unwrap();
        assert!(result.volumes().all(|v| v == 0.0));
        assert_eq!(result.optimum.baseline_mm, BaselineRange::default().b_min_mm);
    }

    #[test]
    fn rejects_bad_ranges() {
        let camera = CameraSpec::default();
        let params = UncertaintyParams::default();
        assert!(matches!(
            optimize_baseline(
                &BaselineRange::new(500.0, 50.0),
                &camera,
                &params,
                &DepthRange::default(),
                100
            ),
            Err(ConfigError::EmptyRange { field: "baseline_range", .. })
        ));
        assert!(matches!(
            optimize_baseline(
                &BaselineRange::default(),
                &camera,
                &params,
                &DepthRange::default(),
                0
            ),
            Err(ConfigError::TooFewSamples { .. })
        ));
    }
}
