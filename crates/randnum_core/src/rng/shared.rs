//! A seeded stream shared between several callers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{SeededRng, UniformSource};

/// Cloneable handle to a single [`SeededRng`].
///
/// All clones draw from the same underlying stream, so the order in which
/// callers draw determines which values each of them sees. Synchronisation
/// lives here; the generator that consumes a `SharedRng` adds none.
///
/// # Examples
///
/// ```rust
/// use randnum_core::rng::{SharedRng, UniformSource};
///
/// let shared = SharedRng::from_seed(7);
/// let mut a = shared.clone();
/// let mut b = shared.clone();
///
/// let _ = a.next_unit();
/// let _ = b.next_unit();
/// assert_eq!(shared.seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<SeededRng>>,
}

impl SharedRng {
    /// Wraps an existing generator.
    pub fn new(rng: SeededRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Creates a shared stream seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SeededRng::from_seed(seed))
    }

    /// Returns the seed of the underlying stream.
    pub fn seed(&self) -> u64 {
        self.lock().seed()
    }

    // SeededRng has no invariant a panicking holder could break.
    fn lock(&self) -> MutexGuard<'_, SeededRng> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl UniformSource for SharedRng {
    fn next_unit(&mut self) -> f64 {
        self.lock().gen_unit()
    }

    /// Holds the lock for the whole buffer, so the values are contiguous in
    /// the shared stream.
    fn fill_unit(&mut self, buffer: &mut [f64]) {
        self.lock().fill_unit(buffer)
    }
}
