//! randnum CLI - command line front end for uniform random number generation
//!
//! # Commands
//!
//! - `randnum generate -n <N> --min <MIN> --max <MAX>` - Draw and print values
//! - `randnum check` - Validate and print the resolved configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate resolves configuration from
//! file, environment and flags, then hands untyped arguments to
//! `randnum_core`, which owns all validation.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Crate version reported by `randnum check`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
