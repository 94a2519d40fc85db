//! Indicator and signal parameters.
//!
//! [`IndicatorConfig`] gathers every period, multiplier and threshold the
//! pipeline uses into one value with documented defaults:
//!
//! | Field | Default |
//! |-------|---------|
//! | `sma_period` | 20 |
//! | `ema_period` | 20 |
//! | `rsi_period` | 14 |
//! | `macd` | fast 12, slow 26, signal 9 |
//! | `bollinger` | period 20, 2.0 standard deviations |
//! | `thresholds` | oversold 30, overbought 70 |
//!
//! The config is serde-enabled; missing fields fall back to the defaults.
//!
//! ```
//! use ta_signal::config::IndicatorConfig;
//!
//! let config: IndicatorConfig = serde_json::from_str(r#"{ "rsi_period": 7 }"#).unwrap();
//! assert_eq!(config.rsi_period, 7);
//! assert_eq!(config.sma_period, 20);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::indicators::bollinger::BollingerParams;
use crate::indicators::macd::MacdParams;
use crate::indicators::{ema_lookback, rsi_lookback, sma_lookback, vwap_lookback};
use crate::signals::SignalThresholds;
use crate::traits::validate_period;

/// Parameters for every indicator and both signal rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Simple moving average period.
    pub sma_period: usize,
    /// Exponential moving average period.
    pub ema_period: usize,
    /// RSI period.
    pub rsi_period: usize,
    /// MACD periods.
    pub macd: MacdParams,
    /// Bollinger Bands period and multiplier.
    pub bollinger: BollingerParams,
    /// RSI levels for the buy and sell rules.
    pub thresholds: SignalThresholds,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 20,
            rsi_period: 14,
            macd: MacdParams::default(),
            bollinger: BollingerParams::default(),
            thresholds: SignalThresholds::default(),
        }
    }
}

impl IndicatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the SMA period.
    #[must_use]
    pub const fn sma_period(mut self, period: usize) -> Self {
        self.sma_period = period;
        self
    }

    /// Sets the EMA period.
    #[must_use]
    pub const fn ema_period(mut self, period: usize) -> Self {
        self.ema_period = period;
        self
    }

    /// Sets the RSI period.
    #[must_use]
    pub const fn rsi_period(mut self, period: usize) -> Self {
        self.rsi_period = period;
        self
    }

    /// Replaces the MACD parameters.
    #[must_use]
    pub const fn macd(mut self, macd: MacdParams) -> Self {
        self.macd = macd;
        self
    }

    /// Replaces the Bollinger parameters.
    #[must_use]
    pub const fn bollinger(mut self, bollinger: BollingerParams) -> Self {
        self.bollinger = bollinger;
        self
    }

    /// Replaces the signal thresholds.
    #[must_use]
    pub const fn thresholds(mut self, thresholds: SignalThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidPeriod` for a zero period or MACD `fast >= slow`
    /// - `Error::InvalidParameter` for a bad Bollinger multiplier or thresholds
    pub fn validate(&self) -> Result<()> {
        validate_period(self.sma_period, "SMA period must be at least 1")?;
        validate_period(self.ema_period, "EMA period must be at least 1")?;
        validate_period(self.rsi_period, "RSI period must be at least 1")?;
        self.macd.validate()?;
        self.bollinger.validate()?;
        self.thresholds.validate()
    }

    /// Longest lookback across all indicators.
    ///
    /// Inputs with this many rows or fewer leave at least one series
    /// entirely undefined.
    ///
    /// ```
    /// use ta_signal::config::IndicatorConfig;
    ///
    /// // MACD signal line: 25 + 8
    /// assert_eq!(IndicatorConfig::default().max_lookback(), 33);
    /// ```
    #[must_use]
    pub fn max_lookback(&self) -> usize {
        [
            sma_lookback(self.sma_period),
            ema_lookback(self.ema_period),
            rsi_lookback(self.rsi_period),
            self.macd.signal_lookback(),
            self.bollinger.lookback(),
            vwap_lookback(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}
