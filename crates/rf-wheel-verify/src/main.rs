//! rf-wheel-verify — simulate many spins and check the outcome distribution
//!
//! Usage:
//!   rf-wheel-verify                     - 6 segments, 20000 spins
//!   rf-wheel-verify 8 200000 --seed 7   - 8 segments, reproducible run
//!   rf-wheel-verify --format json -o report.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rf_wheel::{DEFAULT_FULL_SPINS, DEFAULT_POINTER_OFFSET};
use rf_wheel_verify::{ReportFormat, VerifyConfig, VerifyReport, VerifyRunner};

#[derive(Parser)]
#[command(name = "rf-wheel-verify", about = "Prize wheel outcome verification")]
struct Cli {
    /// Number of prize segments
    #[arg(default_value_t = 6)]
    prize_count: usize,

    /// Number of simulated spins
    #[arg(default_value_t = 20_000)]
    iterations: usize,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Pointer angle in degrees
    #[arg(long, default_value_t = DEFAULT_POINTER_OFFSET, allow_hyphen_values = true)]
    pointer_offset: f64,

    /// Whole turns added to every spin
    #[arg(long, default_value_t = DEFAULT_FULL_SPINS)]
    spins: u32,

    /// Draw fractional degree offsets instead of whole degrees
    #[arg(long)]
    fractional: bool,

    /// Allowed per-segment frequency deviation
    #[arg(long)]
    tolerance: Option<f64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = VerifyConfig::default()
        .with_prize_count(cli.prize_count)
        .with_iterations(cli.iterations)
        .with_pointer_offset(cli.pointer_offset)
        .with_full_spins(cli.spins)
        .with_fractional_offsets(cli.fractional);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(tolerance) = cli.tolerance {
        config = config.with_tolerance(tolerance);
    }

    let runner = VerifyRunner::new(config).context("Invalid verification settings")?;
    let outcome = runner.run().context("Verification run failed")?;
    let anomalies = outcome.anomaly_count;

    let title = format!("Wheel verification ({} segments)", outcome.prize_count);
    let report = VerifyReport::new(title, outcome);

    match cli.output {
        Some(path) => {
            report
                .save(&path, cli.format)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{}", report.render(cli.format)),
    }

    if anomalies > 0 {
        std::process::exit(1);
    }
    Ok(())
}
