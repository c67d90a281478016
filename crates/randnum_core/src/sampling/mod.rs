//! # Uniform Sampling
//!
//! Validation and generation of uniform random numbers on `[min, max]`.
//!
//! ## Module Structure
//!
//! - [`argument`]: `Argument`, an untyped input as it arrives from text or config
//! - [`generator`]: `RandomNumberGenerator`, the `random_numbers` shortcut and
//!   the standalone `validate`/`validate_args` checks
//! - [`sample_set`]: `SampleSet` and its `SampleSummary`
//!
//! ## Validation Order
//!
//! Errors are reported in a fixed order so that callers observe the same
//! error for the same input regardless of which other arguments are wrong:
//!
//! 1. Any argument not numeric -> [`ErrorKind::Type`](crate::types::ErrorKind::Type)
//! 2. `n <= 0` -> [`ErrorKind::Range`](crate::types::ErrorKind::Range)
//! 3. `n` not a whole number (untyped inputs only) -> `ErrorKind::Range`
//! 4. `min > max` -> `ErrorKind::Range`
//! 5. `n` above [`generator::MAX_COUNT`] -> `ErrorKind::Range`

pub mod argument;
pub mod generator;
pub mod sample_set;

pub use argument::Argument;
pub use generator::{random_numbers, validate, validate_args, RandomNumberGenerator, MAX_COUNT};
pub use sample_set::{SampleSet, SampleSummary};
