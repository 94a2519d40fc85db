//! Exponential Moving Average (EMA) indicator.
//!
//! The Exponential Moving Average is a trend-following indicator that gives more
//! weight to recent prices. Unlike the Simple Moving Average, the EMA responds
//! more quickly to recent price changes.
//!
//! # Algorithm
//!
//! A single left-to-right scan carrying only the previous EMA value:
//! 1. The first defined EMA value is the SMA of the first `period` elements
//! 2. Subsequent values use the recursion `EMA = α × Price + (1 - α) × EMA_prev`
//!
//! Each value depends on its predecessor, so the scan cannot be split into
//! independent windows.
//!
//! # Formula
//!
//! ```text
//! α = 2 / (period + 1)
//! EMA[0..period-2] = undefined
//! EMA[period-1] = SMA(prices[0..period])
//! EMA[i] = α × Price[i] + (1 - α) × EMA[i-1]
//! ```
//!
//! # Example
//!
//! ```
//! use ta_signal::indicators::ema::ema;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let result = ema(&data, 3).unwrap();
//!
//! assert_eq!(result.get(1), None);
//! // Seed: (1 + 2 + 3) / 3
//! assert!((result.get(2).unwrap() - 2.0).abs() < 1e-10);
//! ```

use crate::error::{Error, Result};
use crate::series::Series;
use crate::traits::{validate_finite, validate_period, SeriesElement};

/// Returns the lookback period for EMA: `period - 1` leading undefined values.
///
/// # Example
///
/// ```
/// use ta_signal::indicators::ema::ema_lookback;
///
/// assert_eq!(ema_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Exponential Moving Average using standard smoothing.
///
/// Standard EMA uses smoothing factor `α = 2 / (period + 1)`.
///
/// # Returns
///
/// A [`Series`] with the same length as `data`; the first `period - 1`
/// positions are undefined, and every position is undefined when `data` is
/// shorter than `period`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NonFiniteValue` if `data` holds NaN or an infinity
///
/// # Example
///
/// ```
/// use ta_signal::indicators::ema::ema;
///
/// let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0, 15.0];
/// let result = ema(&data, 3).unwrap();
///
/// assert_eq!(result.first_defined_index(), Some(2));
/// ```
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    let alpha = standard_alpha::<T>(period)?;
    ema_with_alpha(data, period, alpha)
}

/// Computes the EMA with a custom smoothing factor (alpha).
///
/// `period` still controls the SMA seed and the lookback.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::InvalidParameter` if `alpha` is not within `(0, 1]`
/// - `Error::NonFiniteValue` if `data` holds NaN or an infinity
///
/// # Example
///
/// ```
/// use ta_signal::indicators::ema::ema_with_alpha;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let result = ema_with_alpha(&data, 3, 0.5).unwrap();
/// assert!((result.get(3).unwrap() - 3.0).abs() < 1e-10);
/// ```
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema_with_alpha<T: SeriesElement>(data: &[T], period: usize, alpha: T) -> Result<Series<T>> {
    validate_period(period, "period must be at least 1")?;
    if !(alpha > T::zero() && alpha <= T::one()) {
        return Err(Error::InvalidParameter {
            name: "alpha",
            reason: "smoothing factor must be in (0, 1]",
        });
    }
    validate_finite(data, "close")?;

    let mut result = Series::undefined(data.len());
    ema_scan(data, period, alpha, 0, &mut result)?;
    Ok(result)
}

/// Computes the standard EMA smoothing factor: α = 2 / (period + 1)
pub(crate) fn standard_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    validate_period(period, "period must be at least 1")?;
    let period_plus_one = T::from_usize(period + 1)?;
    Ok(T::two() / period_plus_one)
}

/// Core EMA scan.
///
/// Runs the seeded recursion over `data` and writes each value to
/// `output[offset + i]`. Assumes `data` is finite, `period > 0` and
/// `output.len() >= offset + data.len()`. Leaves `output` untouched when
/// `data` is shorter than `period`.
pub(crate) fn ema_scan<T: SeriesElement>(
    data: &[T],
    period: usize,
    alpha: T,
    offset: usize,
    output: &mut Series<T>,
) -> Result<()> {
    if data.len() < period {
        return Ok(());
    }

    let one_minus_alpha = T::one() - alpha;
    let period_t = T::from_usize(period)?;

    // Seed with the simple mean of the first window
    let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
    let mut ema_prev = sum / period_t;
    output.set(offset + period - 1, ema_prev);

    // EMA[i] = α × Price[i] + (1 - α) × EMA[i-1]
    for (i, &value) in data.iter().enumerate().skip(period) {
        ema_prev = alpha * value + one_minus_alpha * ema_prev;
        output.set(offset + i, ema_prev);
    }

    Ok(())
}
