//! Per-segment outcome histogram

use serde::{Deserialize, Serialize};

/// Count of wins per segment index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Empty histogram with one bucket per segment
    pub fn new(prize_count: usize) -> Self {
        Self {
            counts: vec![0; prize_count],
            total: 0,
        }
    }

    /// Record a win; out-of-range indices are ignored and reported as false.
    pub fn record(&mut self, index: usize) -> bool {
        match self.counts.get_mut(index) {
            Some(count) => {
                *count += 1;
                self.total += 1;
                true
            }
            None => false,
        }
    }

    /// Add another histogram of the same width
    pub fn merge(&mut self, other: &Histogram) {
        for (count, extra) in self.counts.iter_mut().zip(&other.counts) {
            *count += extra;
        }
        self.total += other.total;
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn prize_count(&self) -> usize {
        self.counts.len()
    }

    /// Observed frequency of `index`
    pub fn frequency(&self, index: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(index).copied().unwrap_or(0) as f64 / self.total as f64
    }

    /// Frequency every segment would have on a fair wheel
    pub fn expected_frequency(&self) -> f64 {
        1.0 / self.counts.len().max(1) as f64
    }

    /// Largest `|frequency - 1/n|` over all segments
    pub fn max_deviation(&self) -> f64 {
        let expected = self.expected_frequency();
        (0..self.counts.len())
            .map(|i| (self.frequency(i) - expected).abs())
            .fold(0.0, f64::max)
    }

    /// Pearson chi-square statistic against a uniform distribution
    pub fn chi_square(&self) -> f64 {
        if self.total == 0 || self.counts.is_empty() {
            return 0.0;
        }
        let expected = self.total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }
}
