//! End-to-end analysis: close/volume in, indicators and signals out.
//!
//! The pipeline runs in two stages over an immutable, validated input:
//!
//! 1. [`compute_indicators`] derives SMA, EMA, RSI, MACD, Bollinger Bands and
//!    VWAP from the close and volume series.
//! 2. [`generate_signals`](crate::signals::generate_signals) combines close,
//!    RSI and VWAP into buy and sell flags.
//!
//! [`analyze`] runs both. Every output series has exactly one slot per input
//! row.
//!
//! # Parallelism
//!
//! With the `parallel` feature, indicators that do not depend on each other
//! are computed concurrently via `rayon::join`. Each indicator is still a
//! single sequential scan, so the results are identical to the sequential
//! build.
//!
//! # Example
//!
//! ```
//! use ta_signal::config::IndicatorConfig;
//! use ta_signal::pipeline::{analyze, PriceVolume};
//!
//! let close: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
//! let volume = vec![1_000.0; 60];
//!
//! let input = PriceVolume::new(&close, &volume).unwrap();
//! let analysis = analyze(&input, &IndicatorConfig::default()).unwrap();
//!
//! assert_eq!(analysis.len(), 60);
//! assert_eq!(analysis.indicators.rsi.first_defined_index(), Some(14));
//! assert_eq!(analysis.signals.buy.len(), 60);
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::indicators::bollinger::BollingerOutput;
use crate::indicators::macd::MacdOutput;
use crate::indicators::{ema, macd, rsi, sma, vwap};
use crate::series::Series;
use crate::signals::{generate_signals, Signals};
use crate::traits::{validate_finite, validate_same_len, validate_volume, SeriesElement};

/// A validated, borrowed view of aligned close and volume series.
#[derive(Debug, Clone, Copy)]
pub struct PriceVolume<'a, T> {
    close: &'a [T],
    volume: &'a [T],
}

impl<'a, T: SeriesElement> PriceVolume<'a, T> {
    /// Validates and wraps the two input series.
    ///
    /// # Errors
    ///
    /// - `Error::LengthMismatch` if the lengths differ
    /// - `Error::NonFiniteValue` for NaN or infinite entries
    /// - `Error::NegativeVolume` for a volume below zero
    pub fn new(close: &'a [T], volume: &'a [T]) -> Result<Self> {
        validate_same_len(close, "close", volume, "volume")?;
        validate_finite(close, "close")?;
        validate_volume(volume)?;
        Ok(Self { close, volume })
    }

    /// The close prices.
    #[must_use]
    pub const fn close(&self) -> &'a [T] {
        self.close
    }

    /// The traded volumes.
    #[must_use]
    pub const fn volume(&self) -> &'a [T] {
        self.volume
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}

/// Every derived series, aligned to the input rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSet<T> {
    /// Simple moving average of close.
    pub sma: Series<T>,
    /// Exponential moving average of close.
    pub ema: Series<T>,
    /// Relative Strength Index of close.
    pub rsi: Series<T>,
    /// MACD line, signal line and histogram.
    pub macd: MacdOutput<T>,
    /// Bollinger Bands of close.
    pub bollinger: BollingerOutput<T>,
    /// Cumulative VWAP.
    pub vwap: Series<T>,
}

impl<T: Copy> IndicatorSet<T> {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sma.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sma.is_empty()
    }

    /// All derived series in presentation order, with stable names.
    ///
    /// ```
    /// use ta_signal::config::IndicatorConfig;
    /// use ta_signal::pipeline::{compute_indicators, PriceVolume};
    ///
    /// let input = PriceVolume::new(&[1.0_f64, 2.0], &[1.0, 1.0]).unwrap();
    /// let set = compute_indicators(&input, &IndicatorConfig::default()).unwrap();
    /// let names: Vec<&str> = set.columns().iter().map(|(name, _)| *name).collect();
    ///
    /// assert_eq!(names[0], "sma");
    /// assert_eq!(names[9], "vwap");
    /// ```
    #[must_use]
    pub fn columns(&self) -> [(&'static str, &Series<T>); 10] {
        [
            ("sma", &self.sma),
            ("ema", &self.ema),
            ("rsi", &self.rsi),
            ("macd", &self.macd.macd_line),
            ("macd_signal", &self.macd.signal_line),
            ("macd_hist", &self.macd.histogram),
            ("bb_upper", &self.bollinger.upper),
            ("bb_middle", &self.bollinger.middle),
            ("bb_lower", &self.bollinger.lower),
            ("vwap", &self.vwap),
        ]
    }
}

/// Indicators and signals from one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis<T> {
    /// The configuration the run used.
    pub config: IndicatorConfig,
    /// Derived series.
    pub indicators: IndicatorSet<T>,
    /// Buy and sell flags.
    pub signals: Signals,
}

impl<T: Copy> Analysis<T> {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Shorthand for [`IndicatorSet::columns`].
    #[must_use]
    pub fn columns(&self) -> [(&'static str, &Series<T>); 10] {
        self.indicators.columns()
    }
}

/// Computes every indicator for `input`.
///
/// # Errors
///
/// Returns the error from [`IndicatorConfig::validate`] for an invalid
/// configuration. The input itself was validated by [`PriceVolume::new`].
pub fn compute_indicators<T: SeriesElement>(
    input: &PriceVolume<'_, T>,
    config: &IndicatorConfig,
) -> Result<IndicatorSet<T>> {
    config.validate()?;
    let set = compute_all(input, config)?;

    for (name, series) in set.columns() {
        debug!(
            indicator = name,
            defined = series.defined_count(),
            first_defined = ?series.first_defined_index(),
            "computed indicator"
        );
    }

    Ok(set)
}

#[cfg(not(feature = "parallel"))]
fn compute_all<T: SeriesElement>(
    input: &PriceVolume<'_, T>,
    config: &IndicatorConfig,
) -> Result<IndicatorSet<T>> {
    let close = input.close();
    Ok(IndicatorSet {
        sma: sma(close, config.sma_period)?,
        ema: ema(close, config.ema_period)?,
        rsi: rsi(close, config.rsi_period)?,
        macd: macd(close, &config.macd)?,
        bollinger: config.bollinger.compute(close)?,
        vwap: vwap(close, input.volume())?,
    })
}

#[cfg(feature = "parallel")]
fn compute_all<T: SeriesElement>(
    input: &PriceVolume<'_, T>,
    config: &IndicatorConfig,
) -> Result<IndicatorSet<T>> {
    let close = input.close();
    let ((sma_result, ema_result), ((rsi_result, macd_result), (bollinger_result, vwap_result))) =
        rayon::join(
            || {
                rayon::join(
                    || sma(close, config.sma_period),
                    || ema(close, config.ema_period),
                )
            },
            || {
                rayon::join(
                    || rayon::join(|| rsi(close, config.rsi_period), || macd(close, &config.macd)),
                    || {
                        rayon::join(
                            || config.bollinger.compute(close),
                            || vwap(close, input.volume()),
                        )
                    },
                )
            },
        );

    Ok(IndicatorSet {
        sma: sma_result?,
        ema: ema_result?,
        rsi: rsi_result?,
        macd: macd_result?,
        bollinger: bollinger_result?,
        vwap: vwap_result?,
    })
}

/// Runs the indicator and signal stages once over `input`.
///
/// # Errors
///
/// Returns an error if `config` is invalid.
pub fn analyze<T: SeriesElement>(
    input: &PriceVolume<'_, T>,
    config: &IndicatorConfig,
) -> Result<Analysis<T>> {
    let indicators = compute_indicators(input, config)?;
    let signals = generate_signals(
        input.close(),
        &indicators.rsi,
        &indicators.vwap,
        &config.thresholds,
    )?;

    info!(
        rows = input.len(),
        buy = signals.buy.count(),
        sell = signals.sell.count(),
        "analysis complete"
    );

    Ok(Analysis {
        config: *config,
        indicators,
        signals,
    })
}
