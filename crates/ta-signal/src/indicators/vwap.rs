//! Volume Weighted Average Price (VWAP) indicator.
//!
//! VWAP is the ratio of the value traded to total volume traded. Here it is
//! anchored at the first row and never resets: the denominator is all volume
//! since row 0, not since a session boundary.
//!
//! # Algorithm
//!
//! A single scan carrying two running sums:
//!
//! ```text
//! VWAP[i] = cumsum(Close × Volume)[i] / cumsum(Volume)[i]
//! ```
//!
//! # Zero Volume
//!
//! While cumulative volume is still zero (leading zero-volume rows, or an
//! all-zero volume column) the ratio is undefined and the position is left
//! undefined. Once any volume has traded every later position is defined,
//! since volume is never negative.
//!
//! # Example
//!
//! ```
//! use ta_signal::indicators::vwap::vwap;
//!
//! let close = vec![10.0_f64, 11.0, 12.0];
//! let volume = vec![0.0_f64, 100.0, 300.0];
//!
//! let result = vwap(&close, &volume).unwrap();
//!
//! assert_eq!(result.get(0), None);
//! assert_eq!(result.get(1), Some(11.0));
//! // (11 × 100 + 12 × 300) / 400
//! assert!((result.get(2).unwrap() - 11.75).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::series::Series;
use crate::traits::{validate_finite, validate_same_len, validate_volume, SeriesElement};

/// Returns the lookback period for VWAP.
///
/// VWAP can be defined from the very first row.
#[inline]
#[must_use]
pub const fn vwap_lookback() -> usize {
    0
}

/// Computes the cumulative VWAP of `close` weighted by `volume`.
///
/// # Errors
///
/// - `Error::LengthMismatch` if the two series differ in length
/// - `Error::NonFiniteValue` if either series holds NaN or an infinity
/// - `Error::NegativeVolume` if any volume is below zero
#[must_use = "this returns a Result with the VWAP values, which should be used"]
pub fn vwap<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Series<T>> {
    validate_same_len(close, "close", volume, "volume")?;
    validate_finite(close, "close")?;
    validate_volume(volume)?;

    let mut cum_pv = T::zero();
    let mut cum_volume = T::zero();

    let result = close
        .iter()
        .zip(volume)
        .map(|(&price, &vol)| {
            cum_pv = cum_pv + price * vol;
            cum_volume = cum_volume + vol;
            (cum_volume > T::zero()).then(|| cum_pv / cum_volume)
        })
        .collect();

    Ok(result)
}
