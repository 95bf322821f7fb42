//! Verification run configuration

use rf_wheel::{DEFAULT_DEADBAND_DEGREES, DEFAULT_FULL_SPINS, DEFAULT_POINTER_OFFSET, SegmentLayout};
use serde::{Deserialize, Serialize};

use crate::{VerifyError, VerifyResult};

/// Configuration for verification runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Number of wheel segments
    pub prize_count: usize,

    /// Number of simulated spins
    pub iterations: usize,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Whole turns added to each spin
    pub full_spins: u32,

    /// Pointer angle
    pub pointer_offset: f64,

    /// Correction deadband
    pub deadband_degrees: f64,

    /// Draw whole-degree offsets, as the production driver does
    pub whole_degree_offsets: bool,

    /// Maximum anomalies kept for the report
    pub max_anomalies: usize,

    /// Allowed deviation of any segment's frequency from `1 / prize_count`
    pub tolerance: f64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            prize_count: 6,
            iterations: 20_000,
            seed: None,
            full_spins: DEFAULT_FULL_SPINS,
            pointer_offset: DEFAULT_POINTER_OFFSET,
            deadband_degrees: DEFAULT_DEADBAND_DEGREES,
            whole_degree_offsets: true,
            max_anomalies: 20,
            tolerance: 0.01,
        }
    }
}

impl VerifyConfig {
    /// Quick config for CI
    pub fn ci() -> Self {
        Self {
            iterations: 10_000,
            seed: Some(0),
            tolerance: 0.03,
            ..Default::default()
        }
    }

    /// Large statistical run
    pub fn exhaustive() -> Self {
        Self {
            iterations: 1_000_000,
            tolerance: 0.005,
            ..Default::default()
        }
    }

    /// Builder: set segment count
    pub fn with_prize_count(mut self, n: usize) -> Self {
        self.prize_count = n;
        self
    }

    /// Builder: set iterations
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set pointer angle
    pub fn with_pointer_offset(mut self, degrees: f64) -> Self {
        self.pointer_offset = degrees;
        self
    }

    /// Builder: set whole turns per spin
    pub fn with_full_spins(mut self, spins: u32) -> Self {
        self.full_spins = spins;
        self
    }

    /// Builder: draw fractional offsets instead of whole degrees
    pub fn with_fractional_offsets(mut self, fractional: bool) -> Self {
        self.whole_degree_offsets = !fractional;
        self
    }

    /// Builder: set uniformity tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reject settings that cannot produce a meaningful run
    pub fn validate(&self) -> VerifyResult<()> {
        if self.iterations == 0 {
            return Err(VerifyError::InvalidArguments("iterations must be at least 1".into()));
        }
        SegmentLayout::new(self.prize_count)?;
        if !self.pointer_offset.is_finite() {
            return Err(VerifyError::InvalidArguments(format!(
                "pointer offset must be finite, got {}",
                self.pointer_offset
            )));
        }
        if !self.deadband_degrees.is_finite() || self.deadband_degrees < 0.0 {
            return Err(VerifyError::InvalidArguments(format!(
                "deadband must be finite and non-negative, got {}",
                self.deadband_degrees
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(VerifyError::InvalidArguments(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
