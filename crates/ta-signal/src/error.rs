//! Error types for ta-signal.
//!
//! Only malformed input and invalid configuration are errors. Short series
//! and degenerate values (zero volume, zero average loss) are handled inside
//! the indicators and never surface here.

use thiserror::Error;

/// The main error type for ta-signal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A period parameter is zero or inconsistent with another period.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A non-period parameter (multiplier, threshold) is out of range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// An input series contains NaN or an infinity.
    ///
    /// Indicators refuse to compute on such data instead of letting the
    /// value leak into every downstream window.
    #[error("non-finite value in {series} at index {index}")]
    NonFiniteValue {
        /// Which input series holds the value (e.g. "close").
        series: &'static str,
        /// Position of the first offending value.
        index: usize,
    },

    /// A volume entry is negative.
    #[error("negative volume at index {index}")]
    NegativeVolume {
        /// Position of the first negative volume.
        index: usize,
    },

    /// Input series that must be aligned have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Human-readable description of the mismatch.
        description: String,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This occurs when using `NumCast::from()` to convert a `usize` period
    /// or an `f64` parameter into the generic element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the ta-signal Error type.
pub type Result<T> = std::result::Result<T, Error>;
