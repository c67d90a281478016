//! The values returned by one generator call.

use serde::Serialize;
use std::ops::Index;
use std::slice;

/// Ordered values drawn uniformly from `[min, max]`.
///
/// Values appear in generation order and every value `v` satisfies
/// `min <= v <= max`. A set is created fresh for each call and shares
/// nothing with the generator that produced it.
///
/// # Examples
/// ```
/// use randnum_core::rng::SeededRng;
/// use randnum_core::sampling::RandomNumberGenerator;
///
/// let mut generator = RandomNumberGenerator::new(SeededRng::from_seed(1));
/// let samples = generator.generate(3, 50.0, 50.0).unwrap();
///
/// assert_eq!(samples.values(), &[50.0, 50.0, 50.0]);
/// assert_eq!(samples.min(), 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSet {
    min: f64,
    max: f64,
    values: Vec<f64>,
}

impl SampleSet {
    /// Builds a set from already-drawn values.
    ///
    /// Callers guarantee `min <= max` and that every value lies in range.
    pub(crate) fn from_draws(min: f64, max: f64, values: Vec<f64>) -> Self {
        debug_assert!(min <= max);
        debug_assert!(values.iter().all(|v| (min..=max).contains(v)));
        Self { min, max, values }
    }

    /// Lower bound the values were drawn for.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound the values were drawn for.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in generation order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the values in generation order.
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consumes the set, returning the values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Descriptive statistics of the drawn values, or `None` if empty.
    ///
    /// The mean is accumulated incrementally, so it stays finite even for
    /// bounds near `f64::MAX`.
    pub fn summary(&self) -> Option<SampleSummary> {
        let (&first, rest) = self.values.split_first()?;

        let mut summary = SampleSummary {
            count: 1,
            min: first,
            max: first,
            mean: first,
        };
        for &value in rest {
            summary.count += 1;
            summary.min = summary.min.min(value);
            summary.max = summary.max.max(value);
            summary.mean += (value - summary.mean) / summary.count as f64;
        }

        Some(summary)
    }
}

impl Index<usize> for SampleSet {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for SampleSet {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl From<SampleSet> for Vec<f64> {
    fn from(set: SampleSet) -> Self {
        set.values
    }
}

/// Observed statistics of a [`SampleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSummary {
    /// Number of values.
    pub count: usize,
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
    /// Arithmetic mean of the values.
    pub mean: f64,
}
