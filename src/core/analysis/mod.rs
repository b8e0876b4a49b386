//! Dataset analysis
//!
//! The [`Analyzer`] composes the two engines over a single dataset: the
//! redaction engine rewrites PII in place, the anomaly scanner then reads
//! the redacted data, and summary statistics are computed last. The analyzer
//! itself adds no logic beyond composition.

pub mod report;
pub mod summary;

use crate::core::anomaly::AnomalyScanner;
use crate::domain::Dataset;
use crate::redaction::{RedactionConfig, RedactionEngine, RedactionReport};
use anyhow::Result;
use std::time::Instant;

pub use report::AnalysisReport;
pub use summary::SummaryStats;

/// Runs the full scan pipeline over a dataset
///
/// # Ownership
///
/// [`analyze`](Self::analyze) takes the dataset by value: it becomes the
/// redacted copy embedded in the report. Callers that still need the
/// original must clone before calling.
pub struct Analyzer {
    engine: RedactionEngine,
    scanner: AnomalyScanner,
}

impl Analyzer {
    /// Create an analyzer from redaction configuration
    pub fn new(config: RedactionConfig) -> Result<Self> {
        Ok(Self {
            engine: RedactionEngine::new(config)?,
            scanner: AnomalyScanner::new(),
        })
    }

    /// Analyze a dataset: redact PII, flag anomalies, summarize amounts
    pub fn analyze(&self, mut dataset: Dataset) -> Result<AnalysisReport> {
        let start = Instant::now();
        let total_rows = dataset.row_count();

        let pii = if self.engine.is_enabled() {
            self.engine.scan_and_redact(&mut dataset)?
        } else {
            RedactionReport::default()
        };

        // Anomalies and statistics read the redacted data, so an amount cell
        // masked as an account number drops out of numeric coercion here too.
        let anomalies = self.scanner.scan(&dataset);
        let summary_stats = SummaryStats::compute(&dataset);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            rows = total_rows,
            pii_cells = pii.total_detections,
            anomalies = anomalies.len(),
            processing_time_ms,
            "Analysis completed"
        );

        Ok(AnalysisReport {
            pii_detected: pii.columns,
            pii_count: pii.total_detections,
            anomalies,
            summary_stats,
            total_rows,
            redacted_data: dataset,
            processing_time_ms,
            timestamp: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellValue;

    fn sample_dataset() -> Dataset {
        let mut ds = Dataset::new();
        ds.push_column(
            "vendor",
            vec![
                CellValue::from("Acme"),
                CellValue::from("Acme"),
                CellValue::from("Globex"),
            ],
        );
        ds.push_column(
            "amount",
            vec![
                CellValue::from("500.00"),
                CellValue::from("500.00"),
                CellValue::from("-20"),
            ],
        );
        ds.push_column(
            "contact",
            vec![
                CellValue::from("a@example.com"),
                CellValue::Null,
                CellValue::from("555-123-4567"),
            ],
        );
        ds
    }

    #[test]
    fn test_analyze_composes_all_reports() {
        let analyzer = Analyzer::new(RedactionConfig::default()).unwrap();
        let report = analyzer.analyze(sample_dataset()).unwrap();

        assert_eq!(report.total_rows, 3);
        assert_eq!(report.pii_count, 2);
        assert!(report.pii_detected.contains_key("contact"));
        assert!(!report.anomalies.is_empty());
        assert!(report.summary_stats.is_some());
        assert_eq!(
            report.redacted_data.column("contact").unwrap().cells[0],
            CellValue::from("REDACTED@EMAIL.COM")
        );
    }

    #[test]
    fn test_disabled_redaction_still_scans_anomalies() {
        let config = RedactionConfig {
            enabled: false,
            ..RedactionConfig::default()
        };
        let analyzer = Analyzer::new(config).unwrap();
        let report = analyzer.analyze(sample_dataset()).unwrap();

        assert_eq!(report.pii_count, 0);
        assert!(report.pii_detected.is_empty());
        assert!(!report.anomalies.is_empty());
        assert_eq!(
            report.redacted_data.column("contact").unwrap().cells[0],
            CellValue::from("a@example.com")
        );
    }
}
