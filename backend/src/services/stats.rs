//! Deterministic noise and numeric helpers shared by the analytics pipeline

/// Reproducible pseudo-random value in [0, 1) for a numeric seed.
///
/// This is the only source of randomness in the pipeline. Callers add
/// distinct offsets to the same day seed to decorrelate signals.
pub fn seeded_noise(seed: f64) -> f64 {
    let raw = (seed * 12.9898 + 78.233).sin() * 43758.5453;
    raw - raw.floor()
}

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, ties toward positive infinity
pub fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Round to two decimal places, ties toward positive infinity
pub fn round2(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Arithmetic mean; 0 for an empty slice
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for fewer than two values
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let mean = average(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
