//! Small numeric helpers for the anomaly detectors

/// Quantile of ascending-sorted values using linear interpolation
///
/// Position is `q * (n - 1)`; fractional positions interpolate between the
/// two neighboring values.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }

    let weight = pos - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Median of ascending-sorted values
pub fn median(sorted: &[f64]) -> Option<f64> {
    quantile(sorted, 0.5)
}
