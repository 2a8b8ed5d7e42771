//! Randomness seam for the simulation.
//!
//! Every probabilistic step in a day draws through [`Dice`]. Production
//! code uses [`SeededDice`] (a `SmallRng`, optionally seeded for
//! reproducible runs); tests use [`ScriptedDice`] to force exact rolls.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform integer draws a simulated day consumes.
pub trait Dice {
    /// Uniform integer in `[0, 100)`.
    fn percent(&mut self) -> u32;

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn between(&mut self, low: u32, high: u32) -> u32;
}

/// [`Dice`] backed by a small, fast, seedable PRNG.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: SmallRng,
}

impl SeededDice {
    /// Deterministic dice: the same seed always yields the same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Dice for SeededDice {
    fn percent(&mut self) -> u32 {
        self.rng.random_range(0..100)
    }

    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }
}

/// [`Dice`] that replays a fixed queue of values.
///
/// Each draw pops the next value and clamps it into the legal range of
/// that draw. Once the queue is empty every draw returns the lowest legal
/// value.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<u32>,
}

impl ScriptedDice {
    /// Create dice that will replay `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Dice for ScriptedDice {
    fn percent(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(0).min(99)
    }

    fn index(&mut self, len: usize) -> usize {
        let raw = self.values.pop_front().unwrap_or(0);
        let idx = usize::try_from(raw).unwrap_or(0);
        idx.min(len.saturating_sub(1))
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        let raw = self.values.pop_front().unwrap_or(low);
        if high <= low {
            return low;
        }
        raw.clamp(low, high.saturating_sub(1))
    }
}
