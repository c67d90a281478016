//! Shared types for the sampling layer.
//!
//! - [`error`]: `RandomNumbersError` and its `ErrorKind` taxonomy

pub mod error;

pub use error::{ErrorKind, RandomNumbersError, Result};
