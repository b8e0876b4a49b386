//! Duplicate payment detection

use super::models::{format_currency, AnomalyFinding, AnomalyKind, Severity};
use super::{AnomalyDetector, AMOUNT_COLUMN, VENDOR_COLUMN};
use crate::domain::{CellValue, Dataset};
use std::collections::BTreeMap;

/// Flags repeated (vendor, amount) pairs
///
/// Grouping is by the raw literal cell values, not their numeric coercion:
/// `"100"` and `"100.0"` land in different groups even though they parse to
/// the same number. Rows missing either cell are skipped.
pub struct DuplicatePaymentDetector;

impl AnomalyDetector for DuplicatePaymentDetector {
    fn name(&self) -> &'static str {
        "duplicate_payments"
    }

    fn detect(&self, dataset: &Dataset) -> Vec<AnomalyFinding> {
        let (Some(vendor_col), Some(amount_col)) = (
            dataset.column(VENDOR_COLUMN),
            dataset.column(AMOUNT_COLUMN),
        ) else {
            return Vec::new();
        };

        let rows = vendor_col.cells.len().min(amount_col.cells.len());
        let mut groups: BTreeMap<(String, String), usize> = BTreeMap::new();
        for row in 0..rows {
            let vendor = &vendor_col.cells[row];
            let amount = &amount_col.cells[row];
            if vendor.is_null() || amount.is_null() {
                continue;
            }
            *groups
                .entry((vendor.to_string(), amount.to_string()))
                .or_insert(0) += 1;
        }

        groups
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|((vendor, amount), count)| {
                let amount_display = match CellValue::Text(amount.clone()).as_number() {
                    Some(n) => format_currency(n),
                    None => format!("${amount}"),
                };
                AnomalyFinding {
                    kind: AnomalyKind::DuplicatePayment,
                    description: format!(
                        "{amount_display} payment to {vendor} appears {count} times"
                    ),
                    severity: Severity::Medium,
                    records_affected: count,
                }
            })
            .collect()
    }
}
