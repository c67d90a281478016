//! Error types for structured error handling.
//!
//! This module provides:
//! - `RandomNumbersError`: Validation failures raised before any value is drawn
//! - `ErrorKind`: The two-way taxonomy (type vs. range) callers branch on

use std::fmt;
use thiserror::Error;

/// Convenience alias for results produced by the sampling layer.
pub type Result<T> = std::result::Result<T, RandomNumbersError>;

/// Coarse classification of a [`RandomNumbersError`].
///
/// # Examples
/// ```
/// use randnum_core::types::{ErrorKind, RandomNumbersError};
///
/// assert_eq!(RandomNumbersError::NonPositiveCount.kind(), ErrorKind::Range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was not a (finite) numeric value.
    Type,
    /// An argument was numeric but outside its permitted range.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Range => write!(f, "range error"),
        }
    }
}

/// Validation errors from random number generation.
///
/// Every variant aborts the call before any value is drawn, so no partial
/// result is ever returned.
///
/// # Variants
/// - `NonNumeric`: An argument was text or a non-finite float
/// - `NonPositiveCount`: `n <= 0`
/// - `FractionalCount`: `n` was numeric but not a whole number
/// - `InvertedBounds`: `min > max`
/// - `CountTooLarge`: `n` values cannot be held in memory
///
/// # Examples
/// ```
/// use randnum_core::types::RandomNumbersError;
///
/// let err = RandomNumbersError::InvertedBounds { min: 10.0, max: 1.0 };
/// assert_eq!(
///     format!("{}", err),
///     "The minimum value must be less than or equal to the maximum value."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomNumbersError {
    /// An argument was not a numeric value.
    #[error("All arguments must be numeric values.")]
    NonNumeric {
        /// Name of the first offending argument (`n`, `min` or `max`).
        argument: &'static str,
    },

    /// The requested count was zero or negative.
    #[error("The number of random numbers to generate must be positive.")]
    NonPositiveCount,

    /// The requested count had a fractional part.
    #[error("The number of random numbers to generate must be a whole number.")]
    FractionalCount {
        /// The count as supplied.
        n: f64,
    },

    /// The lower bound exceeded the upper bound.
    #[error("The minimum value must be less than or equal to the maximum value.")]
    InvertedBounds {
        /// Supplied lower bound.
        min: f64,
        /// Supplied upper bound.
        max: f64,
    },

    /// The requested count exceeds what a single result can hold.
    #[error("The number of random numbers to generate is too large: {n}.")]
    CountTooLarge {
        /// The count as supplied.
        n: f64,
    },
}

impl RandomNumbersError {
    /// Returns the taxonomy bucket for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RandomNumbersError::NonNumeric { .. } => ErrorKind::Type,
            RandomNumbersError::NonPositiveCount
            | RandomNumbersError::FractionalCount { .. }
            | RandomNumbersError::InvertedBounds { .. }
            | RandomNumbersError::CountTooLarge { .. } => ErrorKind::Range,
        }
    }
}
