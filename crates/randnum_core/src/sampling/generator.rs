//! Uniform random number generation with input validation.
//!
//! This module provides [`RandomNumberGenerator`], which validates its
//! inputs and draws values from an injected [`UniformSource`], and the
//! [`random_numbers`] shortcut that draws from the thread-local generator.

use std::mem;
use tracing::debug;

use super::{Argument, SampleSet};
use crate::rng::{ThreadRngSource, UniformSource};
use crate::types::{RandomNumbersError, Result};

/// Largest count a single call can return.
///
/// A `Vec<f64>` holding more values would exceed `isize::MAX` bytes.
pub const MAX_COUNT: i64 = (isize::MAX as usize / mem::size_of::<f64>()) as i64;

/// Draws `n` values uniformly from `[min, max]` using the thread-local
/// generator.
///
/// See [`RandomNumberGenerator::generate`] for the validation rules.
///
/// # Examples
/// ```
/// use randnum_core::random_numbers;
///
/// let samples = random_numbers(10, -1.0, 1.0).unwrap();
/// assert_eq!(samples.len(), 10);
///
/// let err = random_numbers(-5, 1.0, 10.0).unwrap_err();
/// assert!(err.to_string().contains("positive"));
/// ```
pub fn random_numbers(n: i64, min: f64, max: f64) -> Result<SampleSet> {
    RandomNumberGenerator::new(ThreadRngSource::new()).generate(n, min, max)
}

/// Generator of uniformly distributed values over a closed interval.
///
/// The generator owns its [`UniformSource`] but never reseeds it; seeding
/// is the business of whoever constructs the source. Pass `&mut source` to
/// keep ownership on the caller's side.
///
/// # Examples
/// ```
/// use randnum_core::rng::SeededRng;
/// use randnum_core::sampling::RandomNumberGenerator;
///
/// let mut first = RandomNumberGenerator::new(SeededRng::from_seed(123));
/// let mut second = RandomNumberGenerator::new(SeededRng::from_seed(123));
///
/// assert_eq!(
///     first.generate(5, 1.0, 10.0).unwrap(),
///     second.generate(5, 1.0, 10.0).unwrap(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator<S: UniformSource> {
    source: S,
}

impl Default for RandomNumberGenerator<ThreadRngSource> {
    fn default() -> Self {
        Self::new(ThreadRngSource::new())
    }
}

impl<S: UniformSource> RandomNumberGenerator<S> {
    /// Creates a generator drawing from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrows the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consumes the generator, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Draws `n` values uniformly from the closed interval `[min, max]`.
    ///
    /// # Errors
    ///
    /// Checked in this order, the first failure wins:
    /// - `min` or `max` not finite: [`RandomNumbersError::NonNumeric`]
    /// - `n <= 0`: [`RandomNumbersError::NonPositiveCount`]
    /// - `min > max`: [`RandomNumbersError::InvertedBounds`]
    /// - `n > MAX_COUNT`, or the values cannot be allocated:
    ///   [`RandomNumbersError::CountTooLarge`]
    ///
    /// `min == max` is valid and yields `n` copies of `min`.
    pub fn generate(&mut self, n: i64, min: f64, max: f64) -> Result<SampleSet> {
        debug!(n, min, max, "Generating uniform random numbers");

        let result = validate(n, min, max).and_then(|()| self.draw(n, min, max));
        if let Err(err) = &result {
            debug!(error = %err, kind = %err.kind(), "Rejected generator arguments");
        }
        result
    }

    /// Draws values for arguments whose types have not been checked yet.
    ///
    /// Behaves like [`generate`](Self::generate) once every argument is
    /// known to be a finite number. In addition, a numeric `n` with a
    /// fractional part is rejected with
    /// [`RandomNumbersError::FractionalCount`] after the positivity check
    /// and before the bounds are compared.
    ///
    /// # Examples
    /// ```
    /// use randnum_core::rng::SeededRng;
    /// use randnum_core::sampling::{Argument, RandomNumberGenerator};
    /// use randnum_core::types::ErrorKind;
    ///
    /// let mut generator = RandomNumberGenerator::new(SeededRng::from_seed(9));
    /// let err = generator
    ///     .generate_args(&Argument::from("five"), &1.into(), &10.into())
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// assert!(err.to_string().contains("numeric values"));
    /// ```
    pub fn generate_args(
        &mut self,
        n: &Argument,
        min: &Argument,
        max: &Argument,
    ) -> Result<SampleSet> {
        debug!(%n, %min, %max, "Generating uniform random numbers from untyped arguments");

        let result =
            validate_args(n, min, max).and_then(|(n, min, max)| self.draw(n, min, max));
        if let Err(err) = &result {
            debug!(error = %err, kind = %err.kind(), "Rejected generator arguments");
        }
        result
    }

    // Reserved fallibly: an allocator refusal below MAX_COUNT surfaces as CountTooLarge.
    fn draw(&mut self, n: i64, min: f64, max: f64) -> Result<SampleSet> {
        let too_large = || RandomNumbersError::CountTooLarge { n: n as f64 };
        let count = usize::try_from(n).map_err(|_| too_large())?;

        let mut values = Vec::new();
        values.try_reserve_exact(count).map_err(|_| too_large())?;
        values.extend((0..count).map(|_| scale_unit(self.source.next_unit(), min, max)));

        Ok(SampleSet::from_draws(min, max, values))
    }
}

/// Checks typed arguments without drawing anything.
///
/// Applies the same rules, in the same order, as
/// [`RandomNumberGenerator::generate`].
///
/// # Examples
/// ```
/// use randnum_core::sampling::generator::validate;
///
/// assert!(validate(5, 50.0, 50.0).is_ok());
/// assert!(validate(5, 10.0, 1.0).is_err());
/// ```
pub fn validate(n: i64, min: f64, max: f64) -> Result<()> {
    check_bounds_numeric(min, max)?;
    check_count_positive(n as f64)?;
    check_bounds_ordered(min, max)?;
    check_count_limit(n)
}

/// Checks untyped arguments without drawing anything and returns them typed.
///
/// Applies the same rules, in the same order, as
/// [`RandomNumberGenerator::generate_args`].
///
/// # Examples
/// ```
/// use randnum_core::sampling::generator::validate_args;
/// use randnum_core::sampling::Argument;
///
/// let typed = validate_args(&Argument::parse("3"), &Argument::parse("-1"), &Argument::parse("1"));
/// assert_eq!(typed.unwrap(), (3, -1.0, 1.0));
/// ```
pub fn validate_args(n: &Argument, min: &Argument, max: &Argument) -> Result<(i64, f64, f64)> {
    let n = numeric("n", n)?;
    let min = numeric("min", min)?;
    let max = numeric("max", max)?;
    check_count_positive(n)?;
    check_count_whole(n)?;
    check_bounds_ordered(min, max)?;
    // Whole and positive; above MAX_COUNT the cast could saturate.
    if n > MAX_COUNT as f64 {
        return Err(RandomNumbersError::CountTooLarge { n });
    }
    let count = n as i64;
    check_count_limit(count)?;
    Ok((count, min, max))
}

/// Maps `u` in `[0, 1]` onto `[min, max]`.
///
/// The interpolation form avoids the overflow of `max - min` when the bounds
/// straddle zero near `f64::MAX`. The clamp absorbs rounding at the ends and
/// makes `min == max` exact.
#[inline]
fn scale_unit(u: f64, min: f64, max: f64) -> f64 {
    (min * (1.0 - u) + max * u).clamp(min, max)
}

fn numeric(name: &'static str, argument: &Argument) -> Result<f64> {
    argument
        .as_numeric()
        .ok_or(RandomNumbersError::NonNumeric { argument: name })
}

fn check_bounds_numeric(min: f64, max: f64) -> Result<()> {
    if !min.is_finite() {
        return Err(RandomNumbersError::NonNumeric { argument: "min" });
    }
    if !max.is_finite() {
        return Err(RandomNumbersError::NonNumeric { argument: "max" });
    }
    Ok(())
}

fn check_count_positive(n: f64) -> Result<()> {
    if n <= 0.0 {
        return Err(RandomNumbersError::NonPositiveCount);
    }
    Ok(())
}

fn check_count_whole(n: f64) -> Result<()> {
    if n.fract() != 0.0 {
        return Err(RandomNumbersError::FractionalCount { n });
    }
    Ok(())
}

fn check_bounds_ordered(min: f64, max: f64) -> Result<()> {
    if min > max {
        return Err(RandomNumbersError::InvertedBounds { min, max });
    }
    Ok(())
}

fn check_count_limit(n: i64) -> Result<()> {
    if n > MAX_COUNT {
        return Err(RandomNumbersError::CountTooLarge { n: n as f64 });
    }
    Ok(())
}
