//! Threshold signals from RSI and VWAP.
//!
//! Each bar is judged on its own:
//!
//! ```text
//! Buy[i]  = RSI[i] < oversold   AND close[i] < VWAP[i]
//! Sell[i] = RSI[i] > overbought AND close[i] > VWAP[i]
//! ```
//!
//! An undefined RSI or VWAP at `i` makes both signals `false` at `i`. There is
//! no state between bars: a long oversold stretch below VWAP produces a run of
//! consecutive buy signals, not a single crossing event.
//!
//! # Example
//!
//! ```
//! use ta_signal::series::Series;
//! use ta_signal::signals::{generate_signals, SignalThresholds};
//!
//! let close = vec![9.0_f64, 11.0, 10.0];
//! let rsi = Series::from_values(vec![Some(25.0), Some(75.0), None]);
//! let vwap = Series::from_values(vec![Some(10.0), Some(10.0), Some(10.0)]);
//!
//! let signals = generate_signals(&close, &rsi, &vwap, &SignalThresholds::default()).unwrap();
//!
//! assert_eq!(signals.buy.values(), &[true, false, false]);
//! assert_eq!(signals.sell.values(), &[false, true, false]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::series::{Series, SignalSeries};
use crate::traits::{validate_finite, validate_same_len, SeriesElement};

/// RSI levels for the buy and sell rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalThresholds {
    /// Buy requires RSI strictly below this level.
    pub oversold: f64,
    /// Sell requires RSI strictly above this level.
    pub overbought: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl SignalThresholds {
    /// Creates the standard 30/70 thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the oversold level.
    #[must_use]
    pub const fn oversold(mut self, level: f64) -> Self {
        self.oversold = level;
        self
    }

    /// Sets the overbought level.
    #[must_use]
    pub const fn overbought(mut self, level: f64) -> Self {
        self.overbought = level;
        self
    }

    /// Checks that both levels are finite and `oversold <= overbought`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` naming the offending level.
    pub fn validate(&self) -> Result<()> {
        if !self.oversold.is_finite() {
            return Err(Error::InvalidParameter {
                name: "oversold",
                reason: "threshold must be finite",
            });
        }
        if !self.overbought.is_finite() {
            return Err(Error::InvalidParameter {
                name: "overbought",
                reason: "threshold must be finite",
            });
        }
        if self.oversold > self.overbought {
            return Err(Error::InvalidParameter {
                name: "oversold",
                reason: "oversold level must not exceed overbought level",
            });
        }
        Ok(())
    }
}

/// Buy and sell flags, one per input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signals {
    /// Oversold and trading below VWAP.
    pub buy: SignalSeries,
    /// Overbought and trading above VWAP.
    pub sell: SignalSeries,
}

impl Signals {
    /// Number of rows covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buy.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buy.is_empty()
    }

    /// Returns true if either signal fired at `index`.
    #[must_use]
    pub fn any_at(&self, index: usize) -> bool {
        self.buy.get(index) || self.sell.get(index)
    }
}

/// Evaluates both signal rules over aligned close, RSI and VWAP series.
///
/// # Errors
///
/// - `Error::LengthMismatch` if the three inputs are not the same length
/// - `Error::NonFiniteValue` if `close` holds NaN or an infinity
/// - `Error::InvalidParameter` if the thresholds are invalid
pub fn generate_signals<T: SeriesElement>(
    close: &[T],
    rsi: &Series<T>,
    vwap: &Series<T>,
    thresholds: &SignalThresholds,
) -> Result<Signals> {
    thresholds.validate()?;
    check_inputs(close, rsi, vwap)?;

    let oversold = T::from_f64(thresholds.oversold)?;
    let overbought = T::from_f64(thresholds.overbought)?;

    Ok(Signals {
        buy: evaluate(close, rsi, vwap, |r, c, v| r < oversold && c < v),
        sell: evaluate(close, rsi, vwap, |r, c, v| r > overbought && c > v),
    })
}

/// Evaluates only the buy rule.
///
/// # Errors
///
/// Same as [`generate_signals`].
pub fn buy_signals<T: SeriesElement>(
    close: &[T],
    rsi: &Series<T>,
    vwap: &Series<T>,
    oversold: f64,
) -> Result<SignalSeries> {
    let thresholds = SignalThresholds::new().oversold(oversold).overbought(f64::MAX);
    thresholds.validate()?;
    check_inputs(close, rsi, vwap)?;

    let level = T::from_f64(oversold)?;
    Ok(evaluate(close, rsi, vwap, |r, c, v| r < level && c < v))
}

/// Evaluates only the sell rule.
///
/// # Errors
///
/// Same as [`generate_signals`].
pub fn sell_signals<T: SeriesElement>(
    close: &[T],
    rsi: &Series<T>,
    vwap: &Series<T>,
    overbought: f64,
) -> Result<SignalSeries> {
    let thresholds = SignalThresholds::new().oversold(f64::MIN).overbought(overbought);
    thresholds.validate()?;
    check_inputs(close, rsi, vwap)?;

    let level = T::from_f64(overbought)?;
    Ok(evaluate(close, rsi, vwap, |r, c, v| r > level && c > v))
}

fn check_inputs<T: SeriesElement>(close: &[T], rsi: &Series<T>, vwap: &Series<T>) -> Result<()> {
    validate_same_len(close, "close", rsi.values(), "rsi")?;
    validate_same_len(close, "close", vwap.values(), "vwap")?;
    validate_finite(close, "close")
}

/// Applies `rule(rsi, close, vwap)` wherever both RSI and VWAP are defined.
fn evaluate<T, F>(close: &[T], rsi: &Series<T>, vwap: &Series<T>, rule: F) -> SignalSeries
where
    T: SeriesElement,
    F: Fn(T, T, T) -> bool,
{
    close
        .iter()
        .enumerate()
        .map(|(i, &c)| match (rsi.get(i), vwap.get(i)) {
            (Some(r), Some(v)) => rule(r, c, v),
            _ => false,
        })
        .collect()
}
