//! IQR-based amount outlier detection

use super::models::{format_currency, AnomalyFinding, AnomalyKind, Severity};
use super::{stats, AnomalyDetector, AMOUNT_COLUMN};
use crate::domain::Dataset;

/// Fence multiplier applied to the IQR
const IQR_FENCE: f64 = 1.5;

/// Multiple of the median beyond which an outlier is high severity
const HIGH_SEVERITY_FACTOR: f64 = 10.0;

/// Flags amounts outside the IQR fence
///
/// Unparseable cells are dropped before the quartiles are computed. Each
/// out-of-fence value is its own finding, in row order. A value is high
/// severity when its absolute value exceeds ten times the median of all
/// parsed amounts.
pub struct AmountOutlierDetector;

impl AnomalyDetector for AmountOutlierDetector {
    fn name(&self) -> &'static str {
        "amount_outliers"
    }

    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyFinding> {
        let amounts = dataset.numeric_column(AMOUNT_COLUMN);
        if amounts.is_empty() {
            return Vec::new();
        }

        let mut sorted = amounts.clone();
        sorted.sort_by(f64::total_cmp);

        let (Some(q1), Some(q3), Some(median)) = (
            stats::quantile(&sorted, 0.25),
            stats::quantile(&sorted, 0.75),
            stats::median(&sorted),
        ) else {
            return Vec::new();
        };

        let iqr = q3 - q1;
        let lower_bound = q1 - IQR_FENCE * iqr;
        let upper_bound = q3 + IQR_FENCE * iqr;

        amounts
            .into_iter()
            .filter(|&v| v < lower_bound || v > upper_bound)
            .map(|value| {
                let severity = if value.abs() > median * HIGH_SEVERITY_FACTOR {
                    Severity::High
                } else {
                    Severity::Medium
                };
                AnomalyFinding {
                    kind: AnomalyKind::AmountOutlier,
                    description: format!("Unusual amount: {}", format_currency(value)),
                    severity,
                    records_affected: 1,
                }
            })
            .collect()
    }
}
