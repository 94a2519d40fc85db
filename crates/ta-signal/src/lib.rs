//! ta-signal: price/volume indicators and threshold trading signals
//!
//! This crate turns a close-price and volume series into a fixed set of
//! technical indicators (SMA, EMA, RSI, MACD, Bollinger Bands, cumulative
//! VWAP) and two per-bar signals: buy when RSI is oversold and price trades
//! below VWAP, sell when RSI is overbought and price trades above it.
//!
//! # Features
//!
//! - **Aligned output**: every series has one slot per input row; positions
//!   that cannot be computed yet are `None`, never a NaN sentinel
//! - **Strict input**: malformed data (NaN, infinities, negative volume,
//!   misaligned series) is rejected before any computation
//! - **Generics**: works with both `f32` and `f64` data
//! - **Optional parallelism**: the `parallel` feature computes independent
//!   indicators concurrently with identical results
//!
//! # Quick Start
//!
//! ```
//! use ta_signal::prelude::*;
//!
//! let close: Vec<f64> = (0..50).map(|i| 100.0 - i as f64 * 0.8).collect();
//! let volume = vec![250.0; 50];
//!
//! let input = PriceVolume::new(&close, &volume).unwrap();
//! let analysis = analyze(&input, &IndicatorConfig::default()).unwrap();
//!
//! // A steady decline is oversold and trades below its cumulative VWAP
//! assert!(analysis.signals.buy.get(49));
//! assert_eq!(analysis.signals.sell.count(), 0);
//! ```
//!
//! # Short Input
//!
//! Fewer rows than an indicator's lookback is not an error:
//!
//! ```
//! use ta_signal::indicators::sma;
//!
//! let result = sma(&[1.0_f64, 2.0], 10).unwrap();
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.defined_count(), 0);
//! ```
//!
//! # Error Handling
//!
//! Invalid parameters and malformed data return [`Error`]:
//!
//! ```
//! use ta_signal::{indicators::sma, Error};
//!
//! assert!(matches!(sma(&[1.0_f64, 2.0], 0), Err(Error::InvalidPeriod { .. })));
//! assert!(matches!(
//!     sma(&[1.0_f64, f64::NAN], 1),
//!     Err(Error::NonFiniteValue { index: 1, .. })
//! ));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod indicators;
pub mod pipeline;
pub mod prelude;
pub mod series;
pub mod signals;
pub mod traits;

// Re-export commonly used types at crate root
pub use config::IndicatorConfig;
pub use error::{Error, Result};
pub use pipeline::{analyze, compute_indicators, Analysis, IndicatorSet, PriceVolume};
pub use series::{Series, SignalSeries};
pub use signals::{generate_signals, SignalThresholds, Signals};
pub use traits::SeriesElement;
