//! Transaction anomaly scanning
//!
//! Three sub-detectors run in a fixed order over the same dataset:
//! duplicate payments, IQR amount outliers, negative amounts. Each detector
//! checks for the columns it needs and returns an empty result when they are
//! absent; nothing in the scan errors. The scanner never mutates the
//! dataset.

pub mod duplicates;
pub mod models;
pub mod negatives;
pub mod outliers;
pub mod stats;

use crate::domain::Dataset;

pub use duplicates::DuplicatePaymentDetector;
pub use models::{AnomalyFinding, AnomalyKind, Severity};
pub use negatives::NegativeAmountDetector;
pub use outliers::AmountOutlierDetector;

/// Column holding transaction amounts (exact, case-sensitive)
pub const AMOUNT_COLUMN: &str = "amount";

/// Column holding vendor names (exact, case-sensitive)
pub const VENDOR_COLUMN: &str = "vendor";

/// Trait for anomaly detector implementations
pub trait AnomalyDetector: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Scan the dataset, returning zero or more findings
    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyFinding>;
}

/// Runs the sub-detectors in their fixed order and concatenates findings
pub struct AnomalyScanner {
    detectors: Vec<Box<dyn AnomalyDetector>>,
}

impl AnomalyScanner {
    /// Create a scanner with the built-in detector order:
    /// duplicates, then outliers, then negatives
    pub fn new() -> Self {
        Self {
            detectors: vec![
                Box::new(DuplicatePaymentDetector),
                Box::new(AmountOutlierDetector),
                Box::new(NegativeAmountDetector),
            ],
        }
    }

    /// Run every detector and collect their findings in order
    pub fn scan(&self, dataset: &Dataset) -> Vec<AnomalyFinding> {
        let mut findings = Vec::new();
        for detector in &self.detectors {
            let found = detector.detect(dataset);
            tracing::debug!(
                detector = detector.name(),
                findings = found.len(),
                "Anomaly detector completed"
            );
            findings.extend(found);
        }
        findings
    }
}

impl Default for AnomalyScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellValue;

    #[test]
    fn test_scan_concatenates_in_detector_order() {
        let mut ds = Dataset::new();
        ds.push_column(
            "vendor",
            vec![
                CellValue::from("Acme"),
                CellValue::from("Acme"),
                CellValue::from("Globex"),
                CellValue::from("Initech"),
                CellValue::from("Umbrella"),
                CellValue::from("Hooli"),
            ],
        );
        ds.push_column(
            "amount",
            vec![
                CellValue::from("100"),
                CellValue::from("100"),
                CellValue::from("105"),
                CellValue::from("110"),
                CellValue::from("95"),
                CellValue::from("-5000"),
            ],
        );

        let findings = AnomalyScanner::new().scan(&ds);

        let kinds: Vec<AnomalyKind> = findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AnomalyKind::DuplicatePayment,
                AnomalyKind::AmountOutlier,
                AnomalyKind::NegativeAmount,
            ]
        );
    }

    #[test]
    fn test_scan_of_empty_dataset_is_empty() {
        assert!(AnomalyScanner::new().scan(&Dataset::new()).is_empty());
    }

    #[test]
    fn test_scan_does_not_mutate() {
        let mut ds = Dataset::new();
        ds.push_column("amount", vec![CellValue::from("-10"), CellValue::from("5")]);
        let before = ds.clone();
        AnomalyScanner::new().scan(&ds);
        assert_eq!(ds, before);
    }
}
