//! # Random Number Sources
//!
//! The generator never owns a global random state. Every draw goes through
//! a [`UniformSource`] handed to it by the caller, so tests can pin a seed
//! without touching process-wide state.
//!
//! ## Module Structure
//!
//! - `source`: The `UniformSource` trait and the thread-local default source
//! - `prng`: `SeededRng`, a seeded `StdRng` wrapper that remembers its seed
//! - `shared`: `SharedRng`, one seeded stream shared between callers
//!
//! ## Usage Example
//!
//! ```rust
//! use randnum_core::rng::{SeededRng, UniformSource};
//!
//! let mut rng = SeededRng::from_seed(12345);
//! let u = rng.next_unit();
//! assert!((0.0..=1.0).contains(&u));
//!
//! let mut buffer = vec![0.0; 16];
//! rng.fill_unit(&mut buffer);
//! ```

mod prng;
mod shared;
mod source;

pub use prng::SeededRng;
pub use shared::SharedRng;
pub use source::{ThreadRngSource, UniformSource};
