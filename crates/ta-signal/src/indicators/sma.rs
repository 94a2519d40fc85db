//! Simple Moving Average (SMA) indicator.
//!
//! The Simple Moving Average is the arithmetic mean of the trailing `period`
//! values. It is the middle band of Bollinger Bands and the seed of every EMA.
//!
//! # Algorithm
//!
//! O(n) rolling sum: the first window is summed once, then each step adds the
//! newest value and subtracts the one leaving the window.
//!
//! # Formula
//!
//! ```text
//! SMA[0..period-2] = undefined
//! SMA[i] = (Price[i-period+1] + ... + Price[i]) / period
//! ```
//!
//! # Example
//!
//! ```
//! use ta_signal::indicators::sma::sma;
//!
//! let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result.get(1), None);
//! assert!((result.get(2).unwrap() - 11.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::series::Series;
use crate::traits::{validate_finite, validate_period, SeriesElement};

/// Returns the lookback period for SMA: `period - 1` leading undefined values.
///
/// # Example
///
/// ```
/// use ta_signal::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Simple Moving Average.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of values to average over
///
/// # Returns
///
/// A [`Series`] with the same length as `data`. The first `period - 1`
/// positions are undefined; if `data` is shorter than `period` every position
/// is undefined. Empty input gives an empty series.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NonFiniteValue` if `data` holds NaN or an infinity
#[must_use = "this returns a Result with the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "period must be at least 1")?;
    validate_finite(data, "close")?;

    let mut result = Series::undefined(data.len());
    if data.len() < period {
        return Ok(result);
    }

    let period_t = T::from_usize(period)?;

    // Compute initial sum for the first window
    let mut sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
    result.set(period - 1, sum / period_t);

    // Rolling sum for remaining elements: add new value, subtract oldest
    for i in period..data.len() {
        sum = sum + data[i] - data[i - period];
        result.set(i, sum / period_t);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_sma_basic() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.get(0), None);
        assert_eq!(result.get(1), None);
        assert!((result.get(2).unwrap() - 2.0).abs() < EPSILON);
        assert!((result.get(3).unwrap() - 3.0).abs() < EPSILON);
        assert!((result.get(4).unwrap() - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_sma_f32() {
        let data = vec![1.0_f32, 2.0, 3.0, 4.0];
        let result = sma(&data, 2).unwrap();
        assert!((result.get(1).unwrap() - 1.5).abs() < 1e-5);
        assert!((result.get(3).unwrap() - 3.5).abs() < 1e-5);
    }

    #[test]
    fn test_sma_period_one_is_identity() {
        let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0];
        let result = sma(&data, 1).unwrap();
        for (i, &x) in data.iter().enumerate() {
            assert!((result.get(i).unwrap() - x).abs() < EPSILON);
        }
    }

    #[test]
    fn test_sma_period_equals_length() {
        let data = vec![2.0_f64, 4.0, 6.0, 8.0];
        let result = sma(&data, 4).unwrap();
        assert_eq!(result.defined_count(), 1);
        assert!((result.get(3).unwrap() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_sma_matches_window_mean() {
        let data: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 11) as f64 * 0.75).collect();
        let period = 20;
        let result = sma(&data, period).unwrap();

        for i in (period - 1)..data.len() {
            let window = &data[i + 1 - period..=i];
            let mean = window.iter().sum::<f64>() / period as f64;
            assert!((result.get(i).unwrap() - mean).abs() < 1e-9, "index {i}");
        }
    }

    #[test]
    fn test_sma_short_input_is_all_undefined() {
        let data = vec![1.0_f64, 2.0];
        let result = sma(&data, 20).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.defined_count(), 0);
    }

    #[test]
    fn test_sma_empty_input() {
        let data: Vec<f64> = vec![];
        let result = sma(&data, 5).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_sma_zero_period() {
        let data = vec![1.0_f64, 2.0, 3.0];
        assert!(matches!(sma(&data, 0), Err(Error::InvalidPeriod { .. })));
    }

    #[test]
    fn test_sma_rejects_nan() {
        let data = vec![1.0_f64, f64::NAN, 3.0];
        assert_eq!(
            sma(&data, 2),
            Err(Error::NonFiniteValue {
                series: "close",
                index: 1
            })
        );
    }

    #[test]
    fn test_sma_lookback() {
        assert_eq!(sma_lookback(1), 0);
        assert_eq!(sma_lookback(20), 19);
        assert_eq!(sma_lookback(0), 0);
    }
}
