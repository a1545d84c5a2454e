//! Injectable randomness source
//!
//! Every generator draws through [`RandomSource`] instead of a global RNG,
//! so tests can replay fixed draws and callers can seed reproducible runs.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0, 1)`
pub trait RandomSource {
    /// Draw a uniform real in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Draw a uniform real in `[lo, lo + span)`
    fn uniform(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.next_unit() * span
    }

    /// Draw a symmetric offset in `[-width/2, width/2)`
    fn jitter(&mut self, width: f64) -> f64 {
        (self.next_unit() - 0.5) * width
    }

    /// Draw a whole number of degrees in `[0, 360)`
    fn hue(&mut self) -> f64 {
        (self.next_unit() * 360.0).floor()
    }

    /// Pick one element uniformly
    ///
    /// Returns `None` only for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let idx = ((self.next_unit() * items.len() as f64) as usize).min(items.len() - 1);
        items.get(idx)
    }
}

/// Adapter from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local entropy, for interactive use
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic generator for reproducible palettes
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed cycle of draws
///
/// Values are clamped into `[0, 1)`. An empty sequence always yields `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}
