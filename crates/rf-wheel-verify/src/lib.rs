//! # rf-wheel-verify
//!
//! Offline verification harness for the prize wheel resolver.
//!
//! ## Features
//!
//! - **Batch Simulation**: Millions of seeded spins, split across threads
//! - **Reproducible Runs**: Same seed, same histogram, any thread count
//! - **Anomaly Detection**: Out-of-range winners, bad corrections, misaligned landings
//! - **Uniformity Check**: Per-segment frequency deviation and chi-square
//! - **Reports**: Text, JSON and Markdown output
//!
//! ## Example
//!
//! ```rust,ignore
//! use rf_wheel_verify::{VerifyConfig, VerifyRunner};
//!
//! let config = VerifyConfig::default().with_iterations(200_000).with_seed(7);
//! let outcome = VerifyRunner::new(config)?.run()?;
//! assert!(outcome.passed());
//! ```

pub mod config;
pub mod harness;
pub mod histogram;
pub mod report;

pub use config::VerifyConfig;
pub use harness::{Anomaly, AnomalyKind, VerifyOutcome, VerifyRunner};
pub use histogram::Histogram;
pub use report::{ReportFormat, VerifyReport};

use rf_wheel::WheelError;
use thiserror::Error;

/// Errors that can occur during verification
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Wheel(#[from] WheelError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type VerifyResult<T> = std::result::Result<T, VerifyError>;

/// Quick verification run with default settings
pub fn quick_verify(prize_count: usize, iterations: usize, seed: u64) -> VerifyResult<VerifyOutcome> {
    let config = VerifyConfig::default()
        .with_prize_count(prize_count)
        .with_iterations(iterations)
        .with_seed(seed);
    VerifyRunner::new(config)?.run()
}
