//! Relative Strength Index (RSI) indicator.
//!
//! The Relative Strength Index is a momentum oscillator that measures the speed
//! and magnitude of price movements. It oscillates between 0 and 100; readings
//! above 70 are traditionally read as overbought and readings below 30 as
//! oversold.
//!
//! # Algorithm
//!
//! A single scan using Wilder's smoothing, carrying only the running average
//! gain and average loss:
//!
//! 1. Price changes are split into gains and losses (losses stored positive)
//! 2. The first averages are simple means of the first `period` changes
//! 3. Later averages use `avg = (avg_prev × (period - 1) + current) / period`
//! 4. `RSI = 100 - 100 / (1 + RS)` with `RS = avg_gain / avg_loss`
//!
//! # Boundary Conditions
//!
//! - **No losses in the smoothed window** (`avg_loss = 0`): RSI = 100. This
//!   includes a perfectly flat series, where the average gain is zero too.
//! - **No gains** (`avg_gain = 0`, `avg_loss > 0`): RSI = 0
//!
//! # Example
//!
//! ```
//! use ta_signal::indicators::rsi::rsi;
//!
//! let data = vec![44.0_f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0, 43.5, 43.25, 43.0];
//! let result = rsi(&data, 5).unwrap();
//!
//! // First 5 values are undefined: 5 changes need 6 prices
//! assert_eq!(result.first_defined_index(), Some(5));
//! ```

use crate::error::Result;
use crate::series::Series;
use crate::traits::{validate_finite, validate_period, SeriesElement};

/// Returns the lookback period for RSI: `period` leading undefined values.
///
/// # Example
///
/// ```
/// use ta_signal::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Computes the Relative Strength Index using Wilder's smoothing.
///
/// # Returns
///
/// A [`Series`] with the same length as `data`, defined from index `period`
/// onward. Inputs with `period` or fewer values are entirely undefined.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NonFiniteValue` if `data` holds NaN or an infinity
///
/// # Example
///
/// ```
/// use ta_signal::indicators::rsi::rsi;
///
/// let data = vec![44.0_f64, 44.5, 45.0, 44.5, 44.0, 44.5, 45.0];
/// let result = rsi(&data, 3).unwrap();
///
/// let value = result.get(3).unwrap();
/// assert!((0.0..=100.0).contains(&value));
/// ```
#[must_use = "this returns a Result with the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Series<T>> {
    validate_period(period, "period must be at least 1")?;
    validate_finite(data, "close")?;

    let mut result = Series::undefined(data.len());
    if data.len() <= period {
        return Ok(result);
    }

    let period_t = T::from_usize(period)?;
    let period_minus_one_t = T::from_usize(period - 1)?;
    let hundred = T::hundred();

    // Seed: simple averages of the first `period` changes
    let mut sum_gain = T::zero();
    let mut sum_loss = T::zero();
    for i in 1..=period {
        let (gain, loss) = split_change(data[i] - data[i - 1]);
        sum_gain = sum_gain + gain;
        sum_loss = sum_loss + loss;
    }

    let mut avg_gain = sum_gain / period_t;
    let mut avg_loss = sum_loss / period_t;
    result.set(period, rsi_value(avg_gain, avg_loss, hundred));

    for i in (period + 1)..data.len() {
        let (gain, loss) = split_change(data[i] - data[i - 1]);

        avg_gain = (avg_gain * period_minus_one_t + gain) / period_t;
        avg_loss = (avg_loss * period_minus_one_t + loss) / period_t;

        result.set(i, rsi_value(avg_gain, avg_loss, hundred));
    }

    Ok(result)
}

/// Splits a price change into `(gain, loss)`, both non-negative.
#[inline]
fn split_change<T: SeriesElement>(change: T) -> (T, T) {
    if change > T::zero() {
        (change, T::zero())
    } else {
        (T::zero(), -change)
    }
}

/// RSI from smoothed averages; zero average loss reads as 100.
#[inline]
fn rsi_value<T: SeriesElement>(avg_gain: T, avg_loss: T, hundred: T) -> T {
    if avg_loss == T::zero() {
        return hundred;
    }
    let rs = avg_gain / avg_loss;
    let value = hundred - hundred / (T::one() + rs);
    // Rounding can push a tiny negative out of 100 - 100/1
    value.max(T::zero()).min(hundred)
}
