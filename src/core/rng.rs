//! Injectable randomness.
//!
//! Every random decision in the game goes through [`RandomSource`], so a
//! session can run on a real generator in play and on a fixed script in
//! tests.

use std::collections::VecDeque;

use rand::Rng;

/// A source of uniform random draws.
///
/// Only [`RandomSource::unit`] is required; the ranged helpers are derived
/// from it so a scripted source controls every draw with plain fractions.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `min..=max`.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = (max - min) as f64 + 1.0;
        let offset = (self.unit() * span) as u32;
        min + offset.min(max - min)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.unit() * len as f64) as usize).min(len - 1)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<rand::rngs::StdRng> {
    /// Seeded generator for reproducible sessions, or entropy when `seed` is None.
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        use rand::SeedableRng;
        let rng = match seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}

/// Replays a fixed list of unit draws, wrapping around when exhausted.
///
/// Ranged helpers map each fraction onto the requested range, so `0.0`
/// always yields the minimum and values just below `1.0` the maximum.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
    replay: Vec<f64>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let replay: Vec<f64> = draws
            .into_iter()
            .map(|d| d.clamp(0.0, 0.999_999))
            .collect();
        Self {
            draws: replay.iter().copied().collect(),
            replay,
        }
    }

    /// Draws still queued before the script wraps.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.draws.extend(self.replay.iter().copied());
        }
        self.draws.pop_front().unwrap_or(0.0)
    }
}

/// Fraction that makes `index(len)` return `idx` on a [`ScriptedSource`].
pub fn pick(idx: usize, len: usize) -> f64 {
    (idx as f64 + 0.5) / len as f64
}

/// Fraction that makes `range_inclusive(min, max)` return `value` on a [`ScriptedSource`].
pub fn pick_in_range(value: u32, min: u32, max: u32) -> f64 {
    pick((value - min) as usize, (max - min + 1) as usize)
}
