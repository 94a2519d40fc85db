//! Technical analysis indicators.
//!
//! Each indicator is a pure function from one or two input series to one or
//! more [`Series`](crate::series::Series) of the same length.
//!
//! # Overview
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` types via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Single scan**: O(n), carrying only running sums or the previous value
//! - **Length-preserving**: output length always equals input length; positions
//!   inside the lookback are undefined rather than missing
//! - **Strict input**: NaN, infinities and negative volume are rejected with a
//!   typed error before any computation
//!
//! # Indicators
//!
//! ## Trend
//!
//! - [`sma`] - Simple Moving Average over a rolling window
//! - [`ema`] - Exponential Moving Average, seeded with the SMA
//! - [`macd`] - MACD line, signal line and histogram
//!
//! ## Momentum
//!
//! - [`rsi`] - Relative Strength Index with Wilder smoothing
//!
//! ## Volatility
//!
//! - [`bollinger`] - Bollinger Bands (population standard deviation)
//!
//! ## Volume
//!
//! - [`vwap`] - Cumulative Volume Weighted Average Price
//!
//! # Example
//!
//! ```
//! use ta_signal::indicators::{ema, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let ema_result = ema(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//!
//! assert_eq!(sma_result.len(), prices.len());
//! assert_eq!(ema_result.first_defined_index(), Some(4));
//! assert_eq!(rsi_result.first_defined_index(), Some(5));
//! ```
//!
//! # Short Input
//!
//! Asking for an indicator on fewer rows than its lookback is not an error:
//! the result is a full-length series with every position undefined.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod vwap;

pub use bollinger::{bollinger, bollinger_lookback, BollingerOutput, BollingerParams};
pub use ema::{ema, ema_lookback, ema_with_alpha};
pub use macd::{macd, macd_line_lookback, macd_signal_lookback, MacdOutput, MacdParams};
pub use rsi::{rsi, rsi_lookback};
pub use sma::{sma, sma_lookback};
pub use vwap::{vwap, vwap_lookback};
