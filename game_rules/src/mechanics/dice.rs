//! Random sources used by battles and random events.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// Where battles and random events get their numbers from.
pub trait RandomSource {
    /// Reseed from outside entropy. Called at the start of every battle and
    /// every random event.
    fn reseed(&mut self);

    /// Uniform draw from `0..upper`. Returns 0 when `upper` is 0.
    fn below(&mut self, upper: usize) -> usize;

    /// Uniform draw from `low..=high`.
    fn between(&mut self, low: i32, high: i32) -> i32;
}

/// Production source: a standard RNG reseeded from wall-clock seconds.
///
/// Two reseeds within the same second produce the same stream.
#[derive(Debug, Clone)]
pub struct ClockRandom {
    rng: StdRng,
}

impl ClockRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(clock_seed()),
        }
    }
}

impl Default for ClockRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ClockRandom {
    fn reseed(&mut self) {
        let seed = clock_seed();
        log::trace!("reseeding clock random source with {seed}");
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }

    fn between(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Replays a fixed list of results. Reseeding is counted but has no effect.
///
/// Each scripted value is the result of the next draw, clamped into the
/// requested range. Once the script runs out every draw returns the lowest
/// value of its range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<i64>,
    reseeds: u64,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = i64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            reseeds: 0,
        }
    }

    /// Number of scripted values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Number of times `reseed` was called.
    pub const fn reseeds(&self) -> u64 {
        self.reseeds
    }
}

impl RandomSource for ScriptedRandom {
    fn reseed(&mut self) {
        self.reseeds = self.reseeds.saturating_add(1);
    }

    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        let max = i64::try_from(upper - 1).unwrap_or(i64::MAX);
        let value = self.script.pop_front().unwrap_or(0).clamp(0, max);
        usize::try_from(value).unwrap_or(0)
    }

    fn between(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let value = self
            .script
            .pop_front()
            .unwrap_or(i64::from(low))
            .clamp(i64::from(low), i64::from(high));
        i32::try_from(value).unwrap_or(low)
    }
}
