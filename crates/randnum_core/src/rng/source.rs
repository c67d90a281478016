//! The `UniformSource` abstraction and the process-wide default source.

use rand::distributions::{Distribution, Uniform};

/// A source of uniform variates on the closed unit interval `[0, 1]`.
///
/// Implementations decide where the entropy comes from and how (or whether)
/// they are seeded. Consumers must not reseed a source they were handed.
pub trait UniformSource {
    /// Draws one value uniformly from `[0, 1]`.
    fn next_unit(&mut self) -> f64;

    /// Fills `buffer` with values drawn uniformly from `[0, 1]`.
    ///
    /// Empty buffers are a no-op.
    fn fill_unit(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_unit();
        }
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    #[inline]
    fn fill_unit(&mut self, buffer: &mut [f64]) {
        (**self).fill_unit(buffer)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    #[inline]
    fn fill_unit(&mut self, buffer: &mut [f64]) {
        (**self).fill_unit(buffer)
    }
}

/// Process-wide default source backed by `rand::thread_rng()`.
///
/// The thread-local generator is seeded from the operating system on first
/// use and is never reseeded by this type. Use [`SeededRng`](super::SeededRng)
/// when a reproducible stream is required.
#[derive(Debug, Clone, Copy)]
pub struct ThreadRngSource {
    /// Closed unit interval distribution, built once.
    unit: Uniform<f64>,
}

impl ThreadRngSource {
    /// Creates a handle to the thread-local generator.
    pub fn new() -> Self {
        Self {
            unit: Uniform::new_inclusive(0.0, 1.0),
        }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for ThreadRngSource {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.unit.sample(&mut rand::thread_rng())
    }

    fn fill_unit(&mut self, buffer: &mut [f64]) {
        let mut rng = rand::thread_rng();
        for value in buffer.iter_mut() {
            *value = self.unit.sample(&mut rng);
        }
    }
}
