//! Anomaly finding data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of transaction anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyKind {
    /// Same (vendor, amount) pair appearing more than once
    #[serde(rename = "Duplicate Payment")]
    DuplicatePayment,
    /// Amount outside the IQR fence
    #[serde(rename = "Amount Outlier")]
    AmountOutlier,
    /// Amount strictly below zero
    #[serde(rename = "Negative Amount")]
    NegativeAmount,
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DuplicatePayment => "Duplicate Payment",
            Self::AmountOutlier => "Amount Outlier",
            Self::NegativeAmount => "Negative Amount",
        };
        f.write_str(label)
    }
}

/// Finding severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Medium => f.write_str("Medium"),
            Self::High => f.write_str("High"),
        }
    }
}

/// A single flagged anomaly
///
/// Findings carry no identity; the report lists them in detector execution
/// order, then discovery order within each detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFinding {
    /// Kind of anomaly
    #[serde(rename = "type")]
    pub kind: AnomalyKind,
    /// Human-readable description
    pub description: String,
    /// Finding severity
    pub severity: Severity,
    /// Number of records covered by this finding
    pub records_affected: usize,
}

/// Format an amount as a dollar string with thousands separators, 2 decimals
///
/// Negative amounts render with the sign after the dollar symbol
/// (`$-100.00`), matching the report format downstream consumers expect.
pub(crate) fn format_currency(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, rest) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, "$0.00" ; "zero")]
    #[test_case(100.0, "$100.00" ; "hundred")]
    #[test_case(1000.0, "$1,000.00" ; "thousand")]
    #[test_case(1234567.891, "$1,234,567.89" ; "millions_with_fraction")]
    #[test_case(-100.0, "$-100.00" ; "negative_hundred")]
    #[test_case(-5000.5, "$-5,000.50" ; "negative_thousand")]
    #[test_case(999.999, "$1,000.00" ; "rounds_up_to_thousand")]
    fn currency_formatting(value: f64, expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(AnomalyKind::DuplicatePayment.to_string(), "Duplicate Payment");
        assert_eq!(AnomalyKind::AmountOutlier.to_string(), "Amount Outlier");
        assert_eq!(AnomalyKind::NegativeAmount.to_string(), "Negative Amount");
    }

    #[test]
    fn test_finding_serializes_kind_as_type() {
        let finding = AnomalyFinding {
            kind: AnomalyKind::NegativeAmount,
            description: "Negative transaction: $-10.00".to_string(),
            severity: Severity::Medium,
            records_affected: 1,
        };

        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "Negative Amount");
        assert_eq!(json["severity"], "Medium");
        assert_eq!(json["records_affected"], 1);
    }
}
