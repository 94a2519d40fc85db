//! Bollinger Bands indicator.
//!
//! Bollinger Bands are a volatility indicator that consists of three bands:
//! - **Middle Band**: Simple Moving Average (SMA) of the price
//! - **Upper Band**: Middle Band + (k × standard deviation)
//! - **Lower Band**: Middle Band - (k × standard deviation)
//!
//! Where `k` is typically 2 (two standard deviations).
//!
//! # Algorithm
//!
//! A rolling sum gives the middle band in O(1) per bar. The deviation is
//! recomputed over each trailing window with Welford's update (O(period) per
//! bar): a rolling sum of squares loses the variance to cancellation once the
//! series has moved far from its current level, and a flat window would no
//! longer collapse the bands.
//!
//! # Conventions
//!
//! - **Population standard deviation** (÷n, not ÷(n-1)). Tools that use the
//!   sample deviation draw bands wider by a factor of `sqrt(n / (n - 1))`.
//! - The middle band is computed with the same rolling sum as [`sma`], so it
//!   is identical to `sma(data, period)` at every position.
//! - A window of identical values has a deviation of exactly zero, so flat
//!   stretches yield `upper == middle == lower` whatever came before them.
//!
//! [`sma`]: crate::indicators::sma::sma
//!
//! # Formula
//!
//! ```text
//! Middle Band = SMA(price, period)
//! Standard Deviation = sqrt(sum((price - SMA)^2) / period)
//! Upper Band = Middle Band + (k × Standard Deviation)
//! Lower Band = Middle Band - (k × Standard Deviation)
//! ```
//!
//! # Example
//!
//! ```
//! use ta_signal::indicators::bollinger::bollinger;
//!
//! let data = vec![20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
//! let result = bollinger(&data, 5, 2.0).unwrap();
//!
//! assert_eq!(result.middle.first_defined_index(), Some(4));
//! let (upper, middle, lower) = (
//!     result.upper.get(4).unwrap(),
//!     result.middle.get(4).unwrap(),
//!     result.lower.get(4).unwrap(),
//! );
//! assert!(upper > middle && middle > lower);
//! ```

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::series::Series;
use crate::traits::{validate_finite, validate_period, SeriesElement};

/// Returns the lookback period for Bollinger Bands: `period - 1`.
///
/// # Example
///
/// ```
/// use ta_signal::indicators::bollinger::bollinger_lookback;
///
/// assert_eq!(bollinger_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Output of the Bollinger Bands calculation.
///
/// All three bands have the input's length and share the same undefined
/// prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerOutput<T> {
    /// Middle + k × stddev.
    pub upper: Series<T>,
    /// The middle band (Simple Moving Average).
    pub middle: Series<T>,
    /// Middle - k × stddev.
    pub lower: Series<T>,
}

impl<T: Copy> BollingerOutput<T> {
    /// Returns the length of the output series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true if the output series are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Computes Bollinger Bands.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The window for both the SMA and the standard deviation
/// * `num_std_dev` - Band width multiplier (must be finite and non-negative)
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::InvalidParameter` if `num_std_dev` is negative or non-finite
/// - `Error::NonFiniteValue` if `data` holds NaN or an infinity
#[must_use = "this returns a Result with Bollinger Bands values, which should be used"]
pub fn bollinger<T: SeriesElement>(
    data: &[T],
    period: usize,
    num_std_dev: T,
) -> Result<BollingerOutput<T>> {
    validate_period(period, "period must be at least 1")?;
    validate_multiplier(num_std_dev)?;
    validate_finite(data, "close")?;

    let n = data.len();
    let mut upper = Series::undefined(n);
    let mut middle = Series::undefined(n);
    let mut lower = Series::undefined(n);

    if n < period {
        return Ok(BollingerOutput {
            upper,
            middle,
            lower,
        });
    }

    let period_t = T::from_usize(period)?;

    let mut sum = T::zero();
    for &value in data.iter().take(period) {
        sum = sum + value;
    }

    let mut write_bands = |i: usize, sum: T| {
        let mean = sum / period_t;
        let window = &data[i + 1 - period..=i];
        let width = num_std_dev * window_variance(window, period_t).sqrt();
        middle.set(i, mean);
        upper.set(i, mean + width);
        lower.set(i, mean - width);
    };

    write_bands(period - 1, sum);

    for i in period..n {
        // Same update order as the SMA so the middle band matches it exactly
        sum = sum + data[i] - data[i - period];
        write_bands(i, sum);
    }

    Ok(BollingerOutput {
        upper,
        middle,
        lower,
    })
}

fn validate_multiplier<T: SeriesElement>(num_std_dev: T) -> Result<()> {
    if num_std_dev.is_finite() && num_std_dev >= T::zero() {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "std_dev",
            reason: "must be finite and non-negative",
        })
    }
}

/// Population variance of one window, accumulated with Welford's update.
///
/// ```text
/// delta = x - mean
/// mean += delta / count
/// m2 += delta * (x - mean)
/// variance = m2 / period
/// ```
#[inline]
fn window_variance<T: Float>(window: &[T], period: T) -> T {
    let mut count = T::zero();
    let mut mean = T::zero();
    let mut m2 = T::zero();
    for &value in window {
        count = count + T::one();
        let delta = value - mean;
        mean = mean + delta / count;
        m2 = m2 + delta * (value - mean);
    }
    // m2 is a sum of non-negative terms up to rounding
    (m2 / period).max(T::zero())
}

// ==================== Configuration Type ====================

/// Bollinger Bands configuration with fluent setters.
///
/// Defaults are period 20 and a 2.0 standard deviation multiplier.
///
/// # Example
///
/// ```
/// use ta_signal::indicators::bollinger::BollingerParams;
///
/// let prices: Vec<f64> = (0..30).map(|i| 44.0 + (i % 5) as f64 * 0.5).collect();
///
/// let standard = BollingerParams::default().compute(&prices).unwrap();
/// let wide = BollingerParams::new().period(10).std_dev(2.5).compute(&prices).unwrap();
///
/// assert_eq!(standard.middle.first_defined_index(), Some(19));
/// assert_eq!(wide.middle.first_defined_index(), Some(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerParams {
    /// Window for the middle band and the deviation.
    pub period: usize,
    /// Standard deviation multiplier.
    pub std_dev: f64,
}

impl Default for BollingerParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

impl BollingerParams {
    /// Creates the standard (20, 2.0) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookback period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the standard deviation multiplier for the bands.
    #[must_use]
    pub const fn std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.period)
    }

    /// Checks the period and multiplier without computing anything.
    ///
    /// # Errors
    ///
    /// `Error::InvalidPeriod` or `Error::InvalidParameter`.
    pub fn validate(&self) -> Result<()> {
        validate_period(self.period, "period must be at least 1")?;
        validate_multiplier(self.std_dev)
    }

    /// Computes Bollinger Bands using the configured parameters.
    ///
    /// # Errors
    ///
    /// Same as [`bollinger`], plus `Error::NumericConversion` if the
    /// multiplier does not fit `T`.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<BollingerOutput<T>> {
        self.validate()?;
        let std_dev = T::from_f64(self.std_dev)?;
        bollinger(data, self.period, std_dev)
    }
}
