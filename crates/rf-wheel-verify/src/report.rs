//! Report generation for verification runs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::harness::VerifyOutcome;

/// Verification report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Report title
    pub title: String,

    pub outcome: VerifyOutcome,
}

impl VerifyReport {
    pub fn new(title: impl Into<String>, outcome: VerifyOutcome) -> Self {
        Self {
            title: title.into(),
            outcome,
        }
    }

    /// Generate text report
    pub fn to_text(&self) -> String {
        let outcome = &self.outcome;
        let mut output = String::new();

        output.push_str(&format!("Prize distribution after {} spins:\n", outcome.iterations));
        for (i, count) in outcome.histogram.counts().iter().enumerate() {
            output.push_str(&format!("  [{}] => {}\n", i, count));
        }

        if outcome.anomalies.is_empty() {
            output.push_str("No index anomalies detected.\n");
        } else {
            output.push_str("Anomalies:\n");
            for anomaly in &outcome.anomalies {
                output.push_str(&format!("{}\n", anomaly));
            }
            if outcome.anomaly_count > outcome.anomalies.len() {
                output.push_str(&format!(
                    "... and {} more anomalies\n",
                    outcome.anomaly_count - outcome.anomalies.len()
                ));
            }
        }

        output.push('\n');
        output.push_str(&format!("Seed: {}\n", outcome.seed));
        output.push_str(&format!(
            "Max deviation: {:.4} (tolerance {})\n",
            outcome.histogram.max_deviation(),
            outcome.tolerance
        ));
        output.push_str(&format!("Chi-square: {:.3}\n", outcome.histogram.chi_square()));
        output.push_str(&format!("{}\n", outcome.summary()));

        output
    }

    /// Generate JSON report
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".into())
    }

    /// Generate markdown report
    pub fn to_markdown(&self) -> String {
        let outcome = &self.outcome;
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.title));

        let status = if outcome.passed() { "✅ PASS" } else { "❌ FAIL" };
        output.push_str(&format!("## Status: {}\n\n", status));

        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Segments | {} |\n", outcome.prize_count));
        output.push_str(&format!("| Spins | {} |\n", outcome.iterations));
        output.push_str(&format!("| Seed | {} |\n", outcome.seed));
        output.push_str(&format!("| Anomalies | {} |\n", outcome.anomaly_count));
        output.push_str(&format!("| Max Deviation | {:.4} |\n", outcome.histogram.max_deviation()));
        output.push_str(&format!("| Chi-square | {:.3} |\n", outcome.histogram.chi_square()));
        output.push_str(&format!("| Duration | {} ms |\n\n", outcome.duration_ms));

        output.push_str("## Distribution\n\n");
        output.push_str("| Index | Count | Frequency |\n");
        output.push_str("|-------|-------|-----------|\n");
        for (i, count) in outcome.histogram.counts().iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {:.4} |\n",
                i,
                count,
                outcome.histogram.frequency(i)
            ));
        }
        output.push('\n');

        if !outcome.anomalies.is_empty() {
            output.push_str("## Anomalies\n\n");
            for anomaly in &outcome.anomalies {
                output.push_str(&format!(
                    "- **{:?}** at spin {}: `{}`\n",
                    anomaly.kind, anomaly.iteration, anomaly
                ));
            }
            output.push('\n');
        }

        output
    }

    /// Render in the given format
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Markdown => self.to_markdown(),
        }
    }

    /// Save report to file
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> std::io::Result<()> {
        fs::write(path, self.render(format))
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{Anomaly, AnomalyKind};
    use crate::histogram::Histogram;

    fn outcome() -> VerifyOutcome {
        let mut histogram = Histogram::new(3);
        for i in [0, 1, 2, 0, 1, 2] {
            histogram.record(i);
        }
        VerifyOutcome {
            prize_count: 3,
            iterations: 6,
            seed: 9,
            histogram,
            anomalies: Vec::new(),
            anomaly_count: 0,
            tolerance: 0.01,
            duration_ms: 1,
        }
    }

    #[test]
    fn test_text_report_lists_histogram() {
        let report = VerifyReport::new("Wheel", outcome());
        let text = report.to_text();

        assert!(text.starts_with("Prize distribution after 6 spins:\n"));
        assert!(text.contains("  [0] => 2\n"));
        assert!(text.contains("  [2] => 2\n"));
        assert!(text.contains("No index anomalies detected."));
        assert!(text.contains("Seed: 9"));
    }

    #[test]
    fn test_text_report_lists_anomalies() {
        let mut outcome = outcome();
        outcome.anomalies.push(Anomaly {
            iteration: 4,
            kind: AnomalyKind::BadIndex,
            rotation: 1810.0,
            index: 7,
            detail: String::new(),
        });
        outcome.anomaly_count = 3;

        let text = VerifyReport::new("Wheel", outcome).to_text();
        assert!(text.contains("Anomalies:\nBAD_INDEX 7 for rot 1810\n"));
        assert!(text.contains("... and 2 more anomalies"));
        assert!(!text.contains("No index anomalies"));
    }

    #[test]
    fn test_json_and_markdown() {
        let report = VerifyReport::new("Wheel Check", outcome());

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["outcome"]["seed"], 9);
        assert_eq!(json["title"], "Wheel Check");

        let md = report.render(ReportFormat::Markdown);
        assert!(md.starts_with("# Wheel Check\n"));
        assert!(md.contains("✅ PASS"));
        assert!(md.contains("| 1 | 2 | 0.3333 |"));
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        VerifyReport::new("Wheel", outcome()).save(&path, ReportFormat::Json).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"prize_count\": 3"));
    }
}
