//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! The MACD is a trend-following momentum indicator that shows the relationship
//! between two exponential moving averages of a security's price. It consists
//! of three components:
//!
//! - **MACD Line**: The difference between the fast EMA and slow EMA
//! - **Signal Line**: An EMA of the MACD line (typically 9-period)
//! - **Histogram**: The difference between the MACD line and signal line
//!
//! # Formula
//!
//! ```text
//! MACD Line[i] = EMA(fast_period)[i] - EMA(slow_period)[i]
//! Signal Line[i] = EMA(MACD Line, signal_period)[i]
//! Histogram[i] = MACD Line[i] - Signal Line[i]
//! ```
//!
//! # Undefined Positions
//!
//! - MACD Line: first `slow_period - 1` positions (needs the slow EMA)
//! - Signal Line: first `slow_period - 1 + signal_period - 1` positions; its
//!   EMA is seeded with the mean of the first `signal_period` MACD values
//! - Histogram: same as the Signal Line
//!
//! # Example
//!
//! ```
//! use ta_signal::indicators::macd::{macd, MacdParams};
//!
//! let data: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64) * 0.5).collect();
//! let result = macd(&data, &MacdParams::default()).unwrap();
//!
//! assert_eq!(result.macd_line.first_defined_index(), Some(25));
//! assert_eq!(result.signal_line.first_defined_index(), Some(33));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::ema::{ema, ema_scan, standard_alpha};
use crate::series::Series;
use crate::traits::{validate_finite, validate_period, SeriesElement};

/// Returns the number of undefined positions before the first MACD line value.
///
/// # Example
///
/// ```
/// use ta_signal::indicators::macd::macd_line_lookback;
///
/// assert_eq!(macd_line_lookback(26), 25);
/// ```
#[inline]
#[must_use]
pub const fn macd_line_lookback(slow_period: usize) -> usize {
    slow_period.saturating_sub(1)
}

/// Returns the number of undefined positions before the first signal or
/// histogram value.
///
/// # Example
///
/// ```
/// use ta_signal::indicators::macd::macd_signal_lookback;
///
/// assert_eq!(macd_signal_lookback(26, 9), 33);
/// ```
#[inline]
#[must_use]
pub const fn macd_signal_lookback(slow_period: usize, signal_period: usize) -> usize {
    macd_line_lookback(slow_period) + signal_period.saturating_sub(1)
}

/// MACD periods with fluent setters.
///
/// Defaults are the classic 12/26/9.
///
/// ```
/// use ta_signal::indicators::macd::MacdParams;
///
/// let params = MacdParams::new().fast(5).slow(35).signal(5);
/// assert_eq!(params.signal_lookback(), 38);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    /// Fast EMA period.
    pub fast: usize,
    /// Slow EMA period; must exceed `fast`.
    pub slow: usize,
    /// Signal-line EMA period.
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdParams {
    /// Creates the standard 12/26/9 configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA period.
    #[must_use]
    pub const fn fast(mut self, period: usize) -> Self {
        self.fast = period;
        self
    }

    /// Sets the slow EMA period.
    #[must_use]
    pub const fn slow(mut self, period: usize) -> Self {
        self.slow = period;
        self
    }

    /// Sets the signal-line period.
    #[must_use]
    pub const fn signal(mut self, period: usize) -> Self {
        self.signal = period;
        self
    }

    /// Lookback of the MACD line for this configuration.
    #[must_use]
    pub const fn line_lookback(&self) -> usize {
        macd_line_lookback(self.slow)
    }

    /// Lookback of the signal line and histogram for this configuration.
    #[must_use]
    pub const fn signal_lookback(&self) -> usize {
        macd_signal_lookback(self.slow, self.signal)
    }

    /// Checks that all periods are positive and `fast < slow`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` describing the first violated rule.
    pub fn validate(&self) -> Result<()> {
        validate_period(self.fast, "fast period must be at least 1")?;
        validate_period(self.slow, "slow period must be at least 1")?;
        validate_period(self.signal, "signal period must be at least 1")?;
        if self.fast >= self.slow {
            return Err(Error::InvalidPeriod {
                period: self.fast,
                reason: "fast period must be less than slow period",
            });
        }
        Ok(())
    }
}

/// The output of MACD calculation containing all three components.
///
/// All three series have the input's length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdOutput<T> {
    /// The MACD line (fast EMA - slow EMA).
    pub macd_line: Series<T>,
    /// The signal line (EMA of MACD line).
    pub signal_line: Series<T>,
    /// The histogram (MACD line - signal line).
    pub histogram: Series<T>,
}

impl<T: Copy> MacdOutput<T> {
    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd_line.len()
    }

    /// Returns true if the output series are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }
}

/// Computes the Moving Average Convergence Divergence (MACD) indicator.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if any period is zero or `fast >= slow`
/// - `Error::NonFiniteValue` if `data` holds NaN or an infinity
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(data: &[T], params: &MacdParams) -> Result<MacdOutput<T>> {
    params.validate()?;
    validate_finite(data, "close")?;

    let (fast_ema, slow_ema) = fast_and_slow(data, params)?;
    let n = data.len();

    let macd_line: Series<T> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(fast, slow)| Some(fast? - slow?))
        .collect();

    let signal_line = signal_line(&macd_line, params.signal)?;

    let histogram: Series<T> = (0..n)
        .map(|i| Some(macd_line.get(i)? - signal_line.get(i)?))
        .collect();

    Ok(MacdOutput {
        macd_line,
        signal_line,
        histogram,
    })
}

#[cfg(not(feature = "parallel"))]
fn fast_and_slow<T: SeriesElement>(
    data: &[T],
    params: &MacdParams,
) -> Result<(Series<T>, Series<T>)> {
    Ok((ema(data, params.fast)?, ema(data, params.slow)?))
}

#[cfg(feature = "parallel")]
fn fast_and_slow<T: SeriesElement>(
    data: &[T],
    params: &MacdParams,
) -> Result<(Series<T>, Series<T>)> {
    let (fast, slow) = rayon::join(|| ema(data, params.fast), || ema(data, params.slow));
    Ok((fast?, slow?))
}

/// EMA of the MACD line, seeded at its first defined value.
fn signal_line<T: SeriesElement>(macd_line: &Series<T>, signal_period: usize) -> Result<Series<T>> {
    let mut output = Series::undefined(macd_line.len());
    let Some(first) = macd_line.first_defined_index() else {
        return Ok(output);
    };

    // Once the slow EMA is seeded the line stays defined to the end
    let tail: Vec<T> = macd_line.values()[first..].iter().map_while(|v| *v).collect();
    let alpha = standard_alpha::<T>(signal_period)?;
    ema_scan(&tail, signal_period, alpha, first, &mut output)?;

    Ok(output)
}
