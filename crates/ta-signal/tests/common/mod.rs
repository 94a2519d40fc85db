//! Shared test utilities for ta-signal tests.

use ta_signal::Series;

/// Approximate equality check for floating-point values.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Verify that exactly the first `lookback` positions are undefined.
#[allow(dead_code)]
pub fn has_undefined_prefix(series: &Series<f64>, lookback: usize) -> bool {
    series
        .iter()
        .enumerate()
        .all(|(i, v)| v.is_some() == (i >= lookback))
}

/// Deterministic close series with a trend, a cycle and some noise.
#[allow(dead_code)]
pub fn generate_close(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            100.0 + x * 0.05 + (x * 0.15).sin() * 6.0 + ((i * 7919) % 13) as f64 * 0.1
        })
        .collect()
}

/// Deterministic positive volume series.
#[allow(dead_code)]
pub fn generate_volume(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 1_000.0 + ((i * 104_729) % 17) as f64 * 150.0)
        .collect()
}
