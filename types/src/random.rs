//! Uniform draws behind the record's nondeterministic operations.

/// A source of uniformly distributed values in `[0, 1)`.
///
/// The record only ever asks for one draw per call, so implementations are
/// free to be as simple as a fixed sequence.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Process-wide thread-local generator, seeded once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
