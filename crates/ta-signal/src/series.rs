//! Index-aligned output series.
//!
//! Every indicator returns a [`Series`] with exactly one slot per input row.
//! Positions an indicator cannot compute yet (not enough history, no volume
//! traded so far) hold `None` instead of a NaN sentinel, so an undefined value
//! can never take part in arithmetic or a comparison by accident.
//!
//! Signals are plain booleans: [`SignalSeries`].
//!
//! # Example
//!
//! ```
//! use ta_signal::series::Series;
//!
//! let series: Series<f64> = vec![None, None, Some(2.0), Some(3.0)].into_iter().collect();
//!
//! assert_eq!(series.len(), 4);
//! assert_eq!(series.first_defined_index(), Some(2));
//! assert_eq!(series.get(3), Some(3.0));
//! assert_eq!(series.get(0), None);
//! ```

use serde::Serialize;

use crate::traits::SeriesElement;

/// A derived series aligned to the input rows.
///
/// `None` marks an undefined position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Series<T> {
    values: Vec<Option<T>>,
}

impl<T: Copy> Series<T> {
    /// Creates a series of `len` undefined positions.
    #[must_use]
    pub fn undefined(len: usize) -> Self {
        Self {
            values: vec![None; len],
        }
    }

    /// Wraps an existing vector of optional values.
    #[must_use]
    pub const fn from_values(values: Vec<Option<T>>) -> Self {
        Self { values }
    }

    /// Number of positions, defined or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, or `None` if undefined or out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied().flatten()
    }

    /// Returns true if `index` holds a defined value.
    #[inline]
    #[must_use]
    pub fn is_defined(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Iterates over all positions in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
        self.values.iter().copied()
    }

    /// The underlying slots.
    #[must_use]
    pub fn values(&self) -> &[Option<T>] {
        &self.values
    }

    /// Index of the first defined value, if any.
    #[must_use]
    pub fn first_defined_index(&self) -> Option<usize> {
        self.values.iter().position(Option::is_some)
    }

    /// The last defined value, if any.
    #[must_use]
    pub fn last_defined(&self) -> Option<T> {
        self.values.iter().rev().find_map(|v| *v)
    }

    /// Number of defined positions.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub(crate) fn set(&mut self, index: usize, value: T) {
        self.values[index] = Some(value);
    }
}

impl<T: SeriesElement> Series<T> {
    /// Exports the series as a flat vector with NaN in undefined positions.
    ///
    /// This is for presenters and plotting code that expect NaN gaps; it is
    /// never used on the computation path.
    #[must_use]
    pub fn to_nan_vec(&self) -> Vec<T> {
        self.values.iter().map(|v| v.unwrap_or_else(T::nan)).collect()
    }
}

impl<T> FromIterator<Option<T>> for Series<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Series<T> {
    type Item = Option<T>;
    type IntoIter = std::vec::IntoIter<Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// A boolean signal aligned to the input rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignalSeries {
    values: Vec<bool>,
}

impl SignalSeries {
    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the series has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Signal at `index`; out-of-range positions read as `false`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        self.values.get(index).copied().unwrap_or(false)
    }

    /// The underlying flags.
    #[must_use]
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Number of positions where the signal fired.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.iter().filter(|&&v| v).count()
    }

    /// Indices where the signal fired, in ascending order.
    #[must_use]
    pub fn fired_indices(&self) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
            .collect()
    }
}

impl FromIterator<bool> for SignalSeries {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
