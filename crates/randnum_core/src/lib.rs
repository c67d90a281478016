//! # randnum_core: Validated Uniform Random Numbers
//!
//! ## Core Layer Role
//!
//! randnum_core is the only crate with executable sampling logic. It provides:
//! - The generator itself: `RandomNumberGenerator`, `random_numbers` (`sampling`)
//! - Dynamically typed inputs for untyped callers: `Argument` (`sampling::argument`)
//! - The drawn values and their bounds: `SampleSet`, `SampleSummary` (`sampling`)
//! - Injectable randomness: `UniformSource`, `SeededRng`, `SharedRng`,
//!   `ThreadRngSource` (`rng`)
//! - Error types: `RandomNumbersError`, `ErrorKind` (`types::error`)
//!
//! ## Dependencies
//!
//! - rand: pseudo-random generators and the unit uniform distribution
//! - thiserror: error derivation
//! - serde: serialisation of sample sets
//! - tracing: per-call debug events
//!
//! ## Usage Examples
//!
//! ```rust
//! use randnum_core::rng::SeededRng;
//! use randnum_core::sampling::RandomNumberGenerator;
//!
//! let mut generator = RandomNumberGenerator::new(SeededRng::from_seed(42));
//! let samples = generator.generate(5, 1.0, 10.0).unwrap();
//!
//! assert_eq!(samples.len(), 5);
//! assert!(samples.iter().all(|&v| (1.0..=10.0).contains(&v)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod sampling;
pub mod types;

pub use rng::{SeededRng, SharedRng, ThreadRngSource, UniformSource};
pub use sampling::{random_numbers, Argument, RandomNumberGenerator, SampleSet, SampleSummary};
pub use types::{ErrorKind, RandomNumbersError, Result};
