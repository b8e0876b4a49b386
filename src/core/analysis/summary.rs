//! Summary statistics over the amount column

use crate::core::anomaly::{stats, AMOUNT_COLUMN};
use crate::domain::Dataset;
use serde::{Deserialize, Serialize};

/// Basic statistics of the `amount` column
///
/// Only produced when at least one cell coerces to a number; callers see
/// `None` rather than a zeroed block when the column is absent or entirely
/// non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of rows in the dataset (not just numeric ones)
    pub total_transactions: usize,
    /// Sum of parsed amounts
    pub total_amount: f64,
    /// Mean of parsed amounts
    pub average_amount: f64,
    /// Median of parsed amounts
    pub median_amount: f64,
    /// Largest parsed amount
    pub max_amount: f64,
    /// Smallest parsed amount
    pub min_amount: f64,
}

impl SummaryStats {
    /// Compute statistics, or `None` when no amount parses to a number
    pub fn compute(dataset: &Dataset) -> Option<Self> {
        let amounts = dataset.numeric_column(AMOUNT_COLUMN);
        if amounts.is_empty() {
            return None;
        }

        let mut sorted = amounts.clone();
        sorted.sort_by(f64::total_cmp);

        let total: f64 = amounts.iter().sum();
        Some(Self {
            total_transactions: dataset.row_count(),
            total_amount: total,
            average_amount: total / amounts.len() as f64,
            median_amount: stats::median(&sorted)?,
            max_amount: *sorted.last()?,
            min_amount: *sorted.first()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellValue;

    #[test]
    fn test_compute_over_mixed_column() {
        let mut ds = Dataset::new();
        ds.push_column(
            "amount",
            vec![
                CellValue::from("10"),
                CellValue::from("20"),
                CellValue::from("junk"),
                CellValue::from("30"),
            ],
        );

        let stats = SummaryStats::compute(&ds).unwrap();
        // Row count includes the unparseable row
        assert_eq!(stats.total_transactions, 4);
        assert_eq!(stats.total_amount, 60.0);
        assert_eq!(stats.average_amount, 20.0);
        assert_eq!(stats.median_amount, 20.0);
        assert_eq!(stats.max_amount, 30.0);
        assert_eq!(stats.min_amount, 10.0);
    }

    #[test]
    fn test_absent_when_nothing_parses() {
        let mut ds = Dataset::new();
        ds.push_column("amount", vec![CellValue::from("abc"), CellValue::Null]);
        assert_eq!(SummaryStats::compute(&ds), None);
    }

    #[test]
    fn test_absent_without_amount_column() {
        let mut ds = Dataset::new();
        ds.push_column("vendor", vec![CellValue::from("Acme")]);
        assert_eq!(SummaryStats::compute(&ds), None);
    }
}
