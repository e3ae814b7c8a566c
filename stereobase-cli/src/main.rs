use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stereobase_core::{
    constants::{requirements::PROFILE_SIGMA_D_PX, sampling::DEFAULT_PROFILE_SAMPLES},
    RigConfig, Validate,
};

mod report;

/// Stereo baseline optimizer.
#[derive(Debug, Parser)]
#[command(author, version, about = "Choose the stereo baseline that maximizes resolvable workspace")]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sweep candidate baselines and report the one with the largest volume
    Optimize {
        /// Path to JSON RigConfig. The reference rig is used if omitted.
        #[arg(long)]
        config: Option<String>,

        /// Override the grid size for depth and baseline
        #[arg(long)]
        samples: Option<usize>,

        /// Print the full sweep curve as JSON
        #[arg(long)]
        json: bool,
    },

    /// Depth uncertainty over the depth range at one baseline
    Profile {
        /// Baseline in millimeters
        #[arg(long)]
        baseline: f64,

        /// Disparity noise in pixels. Defaults to the config file's
        /// `uncertainty.sigma_d_px`, or 0.5 without `--config`.
        #[arg(long)]
        sigma_d: Option<f64>,

        /// Number of depths to sample
        #[arg(long, default_value_t = DEFAULT_PROFILE_SAMPLES)]
        samples: usize,

        /// Path to JSON RigConfig supplying camera, depth range and requirement
        #[arg(long)]
        config: Option<String>,

        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the reference RigConfig as JSON
    Config,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value = serde_json::from_str(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(value)
}

fn load_config(path: Option<&str>) -> Result<RigConfig> {
    let config = match path {
        Some(p) => load_json_file::<RigConfig>(Path::new(p))?,
        None => RigConfig::default(),
    };
    config.validate().context("invalid rig configuration")?;
    Ok(config)
}

fn run_optimize(config_path: Option<&str>, samples: Option<usize>, json: bool) -> Result<String> {
    let mut config = load_config(config_path)?;
    if let Some(n) = samples {
        config = config.with_samples(n);
    }
    log::info!(
        "Sweeping {} baselines over [{}, {}] mm",
        config.num_samples,
        config.baseline_range.b_min_mm,
        config.baseline_range.b_max_mm
    );

    let result = config.optimize().context("baseline sweep failed")?;
    if json {
        report::to_json(&result)
    } else {
        Ok(report::sweep_summary(&config, &result))
    }
}

fn run_profile(
    config_path: Option<&str>,
    baseline_mm: f64,
    sigma_d_px: Option<f64>,
    samples: usize,
    json: bool,
) -> Result<String> {
    let config = load_config(config_path)?;
    let sigma_d_px = match (sigma_d_px, config_path) {
        (Some(s), _) => s,
        (None, Some(_)) => config.uncertainty.sigma_d_px,
        (None, None) => PROFILE_SIGMA_D_PX,
    };
    let profile = config
        .profile(baseline_mm, sigma_d_px, samples)
        .context("uncertainty profile failed")?;
    if json {
        report::to_json(&profile)
    } else {
        Ok(report::profile_summary(&config, &profile))
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let output = match args.command {
        Command::Optimize { config, samples, json } => {
            run_optimize(config.as_deref(), samples, json)?
        }
        Command::Profile {
            baseline,
            sigma_d,
            samples,
            config,
            json,
        } => run_profile(config.as_deref(), baseline, sigma_d, samples, json)?,
        Command::Config => report::to_json(&RigConfig::default())?,
    };
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stereobase_core::{SweepResult, UncertaintyProfile};
    use tempfile::NamedTempFile;

    fn write_json<T: serde::Serialize>(value: &T, path: &Path) {
        serde_json::to_writer_pretty(fs::File::create(path).unwrap(), value).unwrap();
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["stereobase", "-v", "optimize", "--samples", "200", "--json"])
            .unwrap();
        assert_eq!(args.verbose, 1);
        assert!(matches!(
            args.command,
            Command::Optimize { samples: Some(200), json: true, config: None }
        ));

        let args = Args::try_parse_from(["stereobase", "profile", "--baseline", "148"]).unwrap();
        match args.command {
            Command::Profile { baseline, sigma_d, samples, .. } => {
                assert_eq!(baseline, 148.0);
                assert_eq!(sigma_d, None);
                assert_eq!(samples, DEFAULT_PROFILE_SAMPLES);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn optimize_from_config_file() {
        let config = RigConfig::default().with_samples(120);
        let file = NamedTempFile::new().unwrap();
        write_json(&config, file.path());

        let json = run_optimize(Some(file.path().to_str().unwrap()), None, true)
            .expect("cli helper should succeed");
        let result: SweepResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result.samples.len(), 120);
        assert!(result.optimum.baseline_mm > 50.0 && result.optimum.baseline_mm < 500.0);
        assert!(result.optimum.volume_mm3 > 0.0);
    }

    #[test]
    fn samples_override_config() {
        let text = run_optimize(None, Some(80), false).unwrap();
        assert!(text.contains("80 candidates"));
    }

    #[test]
    fn invalid_config_file_rejected() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{ "depth_range": { "z_min_mm": 700.0, "z_max_mm": 602.0 } }"#,
        )
        .unwrap();

        let err = run_optimize(Some(file.path().to_str().unwrap()), Some(50), false).unwrap_err();
        assert!(format!("{err:#}").contains("depth_range range [700, 602] is empty"));
    }

    #[test]
    fn malformed_json_rejected() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{ not json").unwrap();
        let err = run_optimize(Some(file.path().to_str().unwrap()), None, false).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn profile_as_json() {
        let json = run_profile(None, 148.0, Some(0.5), 100, true).unwrap();
        let profile: UncertaintyProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile.points.len(), 100);
        assert_eq!(profile.baseline_mm, 148.0);
    }

    #[test]
    fn profile_rejects_bad_baseline() {
        assert!(run_profile(None, -10.0, Some(0.5), 100, false).is_err());
    }

    #[test]
    fn profile_sigma_d_source() {
        let mut config = RigConfig::default();
        config.uncertainty.sigma_d_px = 2.0;
        let file = NamedTempFile::new().unwrap();
        write_json(&config, file.path());
        let path = file.path().to_str().unwrap();

        let from_file: UncertaintyProfile =
            serde_json::from_str(&run_profile(Some(path), 148.0, None, 50, true).unwrap()).unwrap();
        assert_eq!(from_file.sigma_d_px, 2.0);

        let overridden: UncertaintyProfile =
            serde_json::from_str(&run_profile(Some(path), 148.0, Some(0.25), 50, true).unwrap())
                .unwrap();
        assert_eq!(overridden.sigma_d_px, 0.25);

        let reference: UncertaintyProfile =
            serde_json::from_str(&run_profile(None, 148.0, None, 50, true).unwrap()).unwrap();
        assert_eq!(reference.sigma_d_px, PROFILE_SIGMA_D_PX);
    }
}
