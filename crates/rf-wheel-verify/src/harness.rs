//! Verification harness and runner

use std::fmt;
use std::time::Instant;

use log::{info, warn};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rf_wheel::{circular_distance, correction_with_deadband, draw_rotation, resolve};
use serde::{Deserialize, Serialize};

use crate::config::VerifyConfig;
use crate::histogram::Histogram;
use crate::VerifyResult;

/// Spins per RNG stream; fixed so results do not depend on thread count
pub const CHUNK_SIZE: usize = 4096;

/// Slack for floating-point error when checking landings
const LANDING_EPSILON: f64 = 1e-6;

/// Kind of anomaly found in a spin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Winner outside `[0, prize_count)`
    BadIndex,
    /// Correction outside `[-180, 180]`
    CorrectionOutOfRange,
    /// Winner does not rest under the pointer after correction
    Misaligned,
    /// Final rotation resolves to a different segment
    WinnerChanged,
}

/// A single suspicious spin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Anomaly {
    /// Spin number within the run
    pub iteration: usize,
    pub kind: AnomalyKind,
    /// Raw rotation drawn for the spin
    pub rotation: f64,
    /// Index the resolver returned
    pub index: usize,
    pub detail: String,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AnomalyKind::BadIndex => write!(f, "BAD_INDEX {} for rot {}", self.index, self.rotation),
            AnomalyKind::CorrectionOutOfRange => {
                write!(f, "BAD_CORRECTION for rot {}: {}", self.rotation, self.detail)
            }
            AnomalyKind::Misaligned => {
                write!(f, "MISALIGNED index {} for rot {}: {}", self.index, self.rotation, self.detail)
            }
            AnomalyKind::WinnerChanged => {
                write!(f, "WINNER_CHANGED index {} for rot {}: {}", self.index, self.rotation, self.detail)
            }
        }
    }
}

/// Result of a verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOutcome {
    pub prize_count: usize,

    /// Total spins simulated
    pub iterations: usize,

    /// Seed used (for reproducibility)
    pub seed: u64,

    pub histogram: Histogram,

    /// First anomalies found, in spin order
    pub anomalies: Vec<Anomaly>,

    /// All anomalies found, including ones not kept
    pub anomaly_count: usize,

    /// Uniformity tolerance the run was checked against
    pub tolerance: f64,

    /// Total duration
    pub duration_ms: u64,
}

impl VerifyOutcome {
    /// Every segment within `tolerance` of `1 / prize_count`
    pub fn is_uniform(&self, tolerance: f64) -> bool {
        self.histogram.max_deviation() <= tolerance
    }

    /// No anomalies and uniform within the run's own tolerance
    pub fn passed(&self) -> bool {
        self.anomaly_count == 0 && self.is_uniform(self.tolerance)
    }

    /// Get spins per second
    pub fn spins_per_sec(&self) -> f64 {
        if self.duration_ms == 0 {
            0.0
        } else {
            self.iterations as f64 * 1000.0 / self.duration_ms as f64
        }
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        format!(
            "{} - {} spins over {} segments, {} anomalies, max deviation {:.4} (tolerance {}) in {}ms ({:.0} spins/s)",
            if self.passed() { "PASS" } else { "FAIL" },
            self.iterations,
            self.prize_count,
            self.anomaly_count,
            self.histogram.max_deviation(),
            self.tolerance,
            self.duration_ms,
            self.spins_per_sec()
        )
    }
}

/// Tally for one RNG stream
struct ChunkTally {
    histogram: Histogram,
    anomalies: Vec<Anomaly>,
    anomaly_count: usize,
    max_kept: usize,
}

impl ChunkTally {
    fn flag(&mut self, anomaly: Anomaly) {
        warn!("Anomaly at spin {}: {}", anomaly.iteration, anomaly);
        self.anomaly_count += 1;
        if self.anomalies.len() < self.max_kept {
            self.anomalies.push(anomaly);
        }
    }
}

/// Main verification runner
pub struct VerifyRunner {
    config: VerifyConfig,
}

impl VerifyRunner {
    /// Create a runner; settings are validated here.
    pub fn new(config: VerifyConfig) -> VerifyResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Settings this runner was built with
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Simulate all spins and collect the outcome
    pub fn run(&self) -> VerifyResult<VerifyOutcome> {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let chunks = self.config.iterations.div_ceil(CHUNK_SIZE);

        info!(
            "Verifying {} spins over {} segments (seed {}, {} chunks)",
            self.config.iterations, self.config.prize_count, seed, chunks
        );

        let start = Instant::now();

        let tallies = (0..chunks)
            .into_par_iter()
            .map(|chunk| self.run_chunk(seed, chunk))
            .collect::<VerifyResult<Vec<_>>>()?;

        let mut histogram = Histogram::new(self.config.prize_count);
        let mut anomalies = Vec::new();
        let mut anomaly_count = 0;
        for tally in tallies {
            histogram.merge(&tally.histogram);
            anomaly_count += tally.anomaly_count;
            let room = self.config.max_anomalies.saturating_sub(anomalies.len());
            anomalies.extend(tally.anomalies.into_iter().take(room));
        }

        let outcome = VerifyOutcome {
            prize_count: self.config.prize_count,
            iterations: self.config.iterations,
            seed,
            histogram,
            anomalies,
            anomaly_count,
            tolerance: self.config.tolerance,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        if outcome.anomaly_count > 0 {
            warn!("{} anomalies detected", outcome.anomaly_count);
        }
        if !outcome.is_uniform(outcome.tolerance) {
            warn!(
                "Distribution outside tolerance: max deviation {:.4} > {}",
                outcome.histogram.max_deviation(),
                outcome.tolerance
            );
        }
        info!("{}", outcome.summary());

        Ok(outcome)
    }

    fn run_chunk(&self, seed: u64, chunk: usize) -> VerifyResult<ChunkTally> {
        let config = &self.config;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(chunk as u64);

        let first = chunk * CHUNK_SIZE;
        let last = (first + CHUNK_SIZE).min(config.iterations);

        let mut tally = ChunkTally {
            histogram: Histogram::new(config.prize_count),
            anomalies: Vec::new(),
            anomaly_count: 0,
            max_kept: config.max_anomalies,
        };

        for iteration in first..last {
            let rotation = draw_rotation(&mut rng, config.full_spins, config.whole_degree_offsets);
            self.check_spin(iteration, rotation, &mut tally)?;
        }

        Ok(tally)
    }

    /// Resolve one rotation, record the winner and flag anything suspicious
    fn check_spin(&self, iteration: usize, rotation: f64, tally: &mut ChunkTally) -> VerifyResult<()> {
        let config = &self.config;
        let resolution = resolve(rotation, config.prize_count, config.pointer_offset)?;
        let index = resolution.index;
        let anomaly = |kind: AnomalyKind, detail: String| Anomaly {
            iteration,
            kind,
            rotation,
            index,
            detail,
        };

        if !tally.histogram.record(index) {
            tally.flag(anomaly(
                AnomalyKind::BadIndex,
                format!("outside [0, {})", config.prize_count),
            ));
            return Ok(());
        }
        let Some(center) = resolution.winning_center() else {
            tally.flag(anomaly(
                AnomalyKind::BadIndex,
                format!("no center among {}", resolution.centers.len()),
            ));
            return Ok(());
        };

        let correction = correction_with_deadband(
            rotation,
            index,
            &resolution.centers,
            config.pointer_offset,
            config.deadband_degrees,
        )?;
        if !(-180.0..=180.0).contains(&correction) {
            tally.flag(anomaly(
                AnomalyKind::CorrectionOutOfRange,
                format!("correction {}", correction),
            ));
        }

        let final_rotation = rotation + correction;
        let miss = circular_distance(center + final_rotation, config.pointer_offset);
        if miss > config.deadband_degrees + LANDING_EPSILON {
            tally.flag(anomaly(
                AnomalyKind::Misaligned,
                format!("rests {:.6} deg from pointer", miss),
            ));
        }

        let landed = resolve(final_rotation, config.prize_count, config.pointer_offset)?.index;
        if landed != index {
            tally.flag(anomaly(
                AnomalyKind::WinnerChanged,
                format!("final rotation {} resolves to {}", final_rotation, landed),
            ));
        }

        Ok(())
    }
}
