//! Core traits for ta-signal numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64`. The module also provides the input validation every public
//! indicator runs before touching the data.
//!
//! # Example
//!
//! ```
//! use ta_signal::traits::{validate_period, validate_finite, SeriesElement};
//!
//! fn mean_of_first<T: SeriesElement>(data: &[T], period: usize) -> ta_signal::Result<T> {
//!     validate_period(period, "period must be at least 1")?;
//!     validate_finite(data, "close")?;
//!
//!     let period_t = T::from_usize(period)?;
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! assert!((mean_of_first(&data, 3).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// # Type Bounds
///
/// - `Float`: Standard floating-point operations
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy + Default`: Cheap values with a zero default
/// - `Send + Sync`: Series can be handed to worker threads
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used for the EMA smoothing factor `alpha = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        // Safe unwrap: 2 is always representable in Float types
        <Self as NumCast>::from(2).unwrap()
    }

    /// Returns the constant 100 as this type.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        // Safe unwrap: 100 is always representable in Float types
        <Self as NumCast>::from(100).unwrap()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is usable.
///
/// `reason` is reported when the period is rejected, so callers can name the
/// parameter (e.g. `"slow period must be at least 1"`).
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize, reason: &'static str) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod { period, reason })
    } else {
        Ok(())
    }
}

/// Validates that every value in a series is finite.
///
/// # Errors
///
/// Returns `Error::NonFiniteValue` naming the first NaN or infinite entry.
#[inline]
pub fn validate_finite<T: SeriesElement>(data: &[T], series: &'static str) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(Error::NonFiniteValue { series, index }),
        None => Ok(()),
    }
}

/// Validates a volume series: finite and non-negative.
///
/// # Errors
///
/// Returns `Error::NonFiniteValue` or `Error::NegativeVolume` for the first
/// offending entry.
#[inline]
pub fn validate_volume<T: SeriesElement>(volume: &[T]) -> Result<()> {
    validate_finite(volume, "volume")?;
    match volume.iter().position(|&v| v < T::zero()) {
        Some(index) => Err(Error::NegativeVolume { index }),
        None => Ok(()),
    }
}

/// Validates that two aligned series have the same length.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` describing both lengths.
#[inline]
pub fn validate_same_len<A, B>(
    left: &[A],
    left_name: &str,
    right: &[B],
    right_name: &str,
) -> Result<()> {
    if left.len() == right.len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            description: format!(
                "{left_name} has {} elements, {right_name} has {}",
                left.len(),
                right.len()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_element_from_usize() {
        let val: f64 = SeriesElement::from_usize(42).unwrap();
        assert!((val - 42.0).abs() < 1e-10);

        let val_f32: f32 = SeriesElement::from_usize(100).unwrap();
        assert!((val_f32 - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_from_f64() {
        let val: f64 = SeriesElement::from_f64(std::f64::consts::PI).unwrap();
        assert!((val - std::f64::consts::PI).abs() < 1e-10);

        let val_f32: f32 = SeriesElement::from_f64(std::f64::consts::PI).unwrap();
        assert!((val_f32 - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_constants() {
        let two: f64 = SeriesElement::two();
        let hundred: f64 = SeriesElement::hundred();
        assert_eq!(two, 2.0);
        assert_eq!(hundred, 100.0);

        let hundred_f32: f32 = SeriesElement::hundred();
        assert_eq!(hundred_f32, 100.0);
    }

    #[test]
    fn test_validate_period() {
        assert!(validate_period(1, "period must be at least 1").is_ok());
        assert!(validate_period(100, "period must be at least 1").is_ok());

        match validate_period(0, "slow period must be at least 1") {
            Err(Error::InvalidPeriod { period, reason }) => {
                assert_eq!(period, 0);
                assert!(reason.starts_with("slow"));
            }
            other => panic!("Expected InvalidPeriod, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite(&[1.0_f64, 2.0, 3.0], "close").is_ok());
        assert!(validate_finite::<f64>(&[], "close").is_ok());

        let result = validate_finite(&[1.0_f64, f64::NAN, f64::INFINITY], "close");
        assert_eq!(
            result,
            Err(Error::NonFiniteValue {
                series: "close",
                index: 1
            })
        );

        let result = validate_finite(&[1.0_f32, f32::NEG_INFINITY], "close");
        assert!(matches!(result, Err(Error::NonFiniteValue { index: 1, .. })));
    }

    #[test]
    fn test_validate_volume() {
        assert!(validate_volume(&[0.0_f64, 10.0, 5.5]).is_ok());
        assert_eq!(
            validate_volume(&[1.0_f64, 2.0, -1.0]),
            Err(Error::NegativeVolume { index: 2 })
        );
        assert!(matches!(
            validate_volume(&[f64::NAN]),
            Err(Error::NonFiniteValue {
                series: "volume",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_volume_negative_zero_is_allowed() {
        // -0.0 compares equal to 0.0, so it is not a negative volume
        assert!(validate_volume(&[-0.0_f64, 1.0]).is_ok());
    }

    #[test]
    fn test_validate_same_len() {
        assert!(validate_same_len(&[1.0_f64, 2.0], "close", &[3.0_f64, 4.0], "volume").is_ok());

        match validate_same_len(&[1.0_f64, 2.0], "close", &[3.0_f64], "volume") {
            Err(Error::LengthMismatch { description }) => {
                assert_eq!(description, "close has 2 elements, volume has 1");
            }
            other => panic!("Expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_series_element_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<f64>();
        assert_send_sync::<f32>();
    }
}
