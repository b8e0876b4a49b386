//! Combined analysis report

use crate::core::analysis::summary::SummaryStats;
use crate::core::anomaly::AnomalyFinding;
use crate::domain::Dataset;
use crate::redaction::PiiCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Full result of analyzing one dataset
///
/// The single structure handed to the presentation layer: per-column PII
/// category sets, the global detection count, the ordered anomaly findings,
/// optional summary statistics, and the redacted dataset for rendering or
/// export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Distinct PII categories per column
    pub pii_detected: BTreeMap<String, BTreeSet<PiiCategory>>,

    /// Total number of cells containing PII
    pub pii_count: usize,

    /// Anomaly findings in detector order
    pub anomalies: Vec<AnomalyFinding>,

    /// Amount statistics; absent when no amount parses to a number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_stats: Option<SummaryStats>,

    /// Number of rows in the dataset
    pub total_rows: usize,

    /// The dataset after redaction
    pub redacted_data: Dataset,

    /// Wall time of the analysis
    pub processing_time_ms: u64,

    /// When the analysis ran
    pub timestamp: DateTime<Utc>,
}

impl AnalysisReport {
    /// Whether any PII or anomaly was found
    pub fn has_findings(&self) -> bool {
        self.pii_count > 0 || !self.anomalies.is_empty()
    }

    /// Format the report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                   LEDGERSCAN ANALYSIS REPORT                  \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Rows Analyzed:        {}\n", self.total_rows));
        output.push_str(&format!("  PII Cells Redacted:   {}\n", self.pii_count));
        output.push_str(&format!("  Anomalies Flagged:    {}\n", self.anomalies.len()));
        output.push_str(&format!(
            "  Processing Time:      {} ms\n",
            self.processing_time_ms
        ));
        if let Some(ref stats) = self.summary_stats {
            output.push_str(&format!(
                "  Total Amount:         {:.2}\n",
                stats.total_amount
            ));
            output.push_str(&format!(
                "  Average Amount:       {:.2}\n",
                stats.average_amount
            ));
            output.push_str(&format!(
                "  Median Amount:        {:.2}\n",
                stats.median_amount
            ));
            output.push_str(&format!(
                "  Amount Range:         {:.2} to {:.2}\n",
                stats.min_amount, stats.max_amount
            ));
        }
        output.push('\n');

        if !self.pii_detected.is_empty() {
            output.push_str("🔒 PII DETECTED BY COLUMN\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for (column, categories) in &self.pii_detected {
                let labels: Vec<&str> = categories.iter().map(|c| c.label()).collect();
                output.push_str(&format!("  {:30} {}\n", column, labels.join(", ")));
            }
            output.push('\n');
        }

        if !self.anomalies.is_empty() {
            output.push_str("⚠️  ANOMALIES\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for finding in &self.anomalies {
                output.push_str(&format!(
                    "  [{:6}] {}: {}\n",
                    finding.severity.to_string(),
                    finding.kind,
                    finding.description
                ));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format the report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON report to a file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::anomaly::{AnomalyKind, Severity};

    fn sample_report() -> AnalysisReport {
        let mut pii_detected = BTreeMap::new();
        pii_detected.insert(
            "contact".to_string(),
            BTreeSet::from([PiiCategory::Email, PiiCategory::Phone]),
        );

        AnalysisReport {
            pii_detected,
            pii_count: 3,
            anomalies: vec![AnomalyFinding {
                kind: AnomalyKind::AmountOutlier,
                description: "Unusual amount: $1,000.00".to_string(),
                severity: Severity::High,
                records_affected: 1,
            }],
            summary_stats: None,
            total_rows: 5,
            redacted_data: Dataset::new(),
            processing_time_ms: 2,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_format_console_sections() {
        let output = sample_report().format_console();
        assert!(output.contains("LEDGERSCAN ANALYSIS REPORT"));
        assert!(output.contains("Rows Analyzed:        5"));
        assert!(output.contains("PII DETECTED BY COLUMN"));
        // Categories list in detection precedence order
        assert!(output.contains("Phone, Email"));
        assert!(output.contains("Unusual amount: $1,000.00"));
    }

    #[test]
    fn test_json_omits_absent_summary() {
        let json = sample_report().format_json().unwrap();
        assert!(!json.contains("summary_stats"));
        assert!(json.contains("pii_detected"));
    }

    #[test]
    fn test_has_findings() {
        let report = sample_report();
        assert!(report.has_findings());

        let empty = AnalysisReport {
            pii_detected: BTreeMap::new(),
            pii_count: 0,
            anomalies: Vec::new(),
            summary_stats: None,
            total_rows: 0,
            redacted_data: Dataset::new(),
            processing_time_ms: 0,
            timestamp: Utc::now(),
        };
        assert!(!empty.has_findings());
    }
}
