//! Running statistics over sample windows

use crate::core::constants::{RATING_MAX, RATING_MIN};

/// Arithmetic mean; 0 for an empty slice
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for fewer than two values
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = average(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Clamp a rating or risk score into [0, 100]
pub fn clamp_rating(value: f64) -> f64 {
    value.clamp(RATING_MIN, RATING_MAX)
}
