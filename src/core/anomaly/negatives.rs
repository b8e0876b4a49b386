//! Negative amount detection

use super::models::{format_currency, AnomalyFinding, AnomalyKind, Severity};
use super::{AnomalyDetector, AMOUNT_COLUMN};
use crate::domain::Dataset;

/// Flags every amount strictly below zero
///
/// A negative value far enough out to also trip the IQR fence is reported by
/// both this detector and the outlier detector; the double report is kept.
pub struct NegativeAmountDetector;

impl AnomalyDetector for NegativeAmountDetector {
    fn name(&self) -> &'static str {
        "negative_amounts"
    }

    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyFinding> {
        dataset
            .numeric_column(AMOUNT_COLUMN)
            .into_iter()
            .filter(|&v| v < 0.0)
            .map(|value| AnomalyFinding {
                kind: AnomalyKind::NegativeAmount,
                description: format!("Negative transaction: {}", format_currency(value)),
                severity: Severity::Medium,
                records_affected: 1,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, Dataset};

    #[test]
    fn test_flags_each_negative_value() {
        let mut ds = Dataset::new();
        ds.push_column(
            "amount",
            vec![
                CellValue::from("100"),
                CellValue::from("-25.50"),
                CellValue::from("0"),
                CellValue::from("-3"),
            ],
        );

        let findings = NegativeAmountDetector.detect(&ds);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].description, "Negative transaction: $-25.50");
        assert_eq!(findings[1].description, "Negative transaction: $-3.00");
        assert!(findings
            .iter()
            .all(|f| f.severity == Severity::Medium && f.records_affected == 1));
    }

    #[test]
    fn test_zero_is_not_negative() {
        let mut ds = Dataset::new();
        ds.push_column("amount", vec![CellValue::from("0"), CellValue::from("0.00")]);
        assert!(NegativeAmountDetector.detect(&ds).is_empty());
    }

    #[test]
    fn test_missing_column_is_a_no_op() {
        assert!(NegativeAmountDetector.detect(&Dataset::new()).is_empty());
    }
}
