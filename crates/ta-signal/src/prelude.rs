//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ta_signal::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//!
//! assert_eq!(sma_result.len(), ema_result.len());
//! assert_eq!(rsi_result.get(9), Some(100.0));
//! ```
//!
//! # Contents
//!
//! - Errors: [`Error`], [`Result`]
//! - Data: [`Series`], [`SignalSeries`], [`SeriesElement`]
//! - Indicators: `sma`, `ema`, `rsi`, `macd`, `bollinger`, `vwap` and their
//!   `*_lookback` helpers
//! - Configuration: [`IndicatorConfig`], [`MacdParams`], [`BollingerParams`],
//!   [`SignalThresholds`]
//! - Pipeline: [`PriceVolume`], [`analyze`], [`compute_indicators`],
//!   [`generate_signals`]

// Error types
pub use crate::error::{Error, Result};

// Data types
pub use crate::series::{Series, SignalSeries};
pub use crate::traits::SeriesElement;

// Indicator functions and outputs
pub use crate::indicators::{
    bollinger, ema, ema_with_alpha, macd, rsi, sma, vwap, BollingerOutput, BollingerParams,
    MacdOutput, MacdParams,
};

// Lookback functions
pub use crate::indicators::{
    bollinger_lookback, ema_lookback, macd_line_lookback, macd_signal_lookback, rsi_lookback,
    sma_lookback, vwap_lookback,
};

// Configuration and pipeline
pub use crate::config::IndicatorConfig;
pub use crate::pipeline::{analyze, compute_indicators, Analysis, IndicatorSet, PriceVolume};
pub use crate::signals::{buy_signals, generate_signals, sell_signals, SignalThresholds, Signals};
