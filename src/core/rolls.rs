//! Random roll source used by attack behaviors.
//!
//! Attacks only ever need two kinds of draws: a uniform integer from an
//! inclusive range and a uniform float in `[0, 1)`. Every `rand::Rng`
//! provides both, so production code passes `rand::thread_rng()` and tests
//! pass a seeded `ChaCha8Rng`. [`ScriptedRolls`] replays a fixed sequence for
//! golden-output scenarios.

use rand::Rng;
use std::collections::VecDeque;

/// Capability to produce the draws an attack consumes.
pub trait RollSource {
    /// Uniform integer in `low..=high`.
    fn roll_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn roll_unit(&mut self) -> f64;

    /// True with probability `chance`.
    fn roll_chance(&mut self, chance: f64) -> bool {
        self.roll_unit() < chance
    }
}

impl<R: Rng + ?Sized> RollSource for R {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }

    fn roll_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays pre-recorded rolls in order.
///
/// Range rolls and unit rolls come from separate queues. Range values are
/// clamped into the requested range. Once a queue runs dry the source yields
/// the low end of the range, and a unit roll of `0.99` that never triggers
/// any archetype's chance.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    ranges: VecDeque<u32>,
    units: VecDeque<f64>,
}

impl ScriptedRolls {
    pub fn new(
        ranges: impl IntoIterator<Item = u32>,
        units: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            ranges: ranges.into_iter().collect(),
            units: units.into_iter().collect(),
        }
    }

    /// Rolls not yet consumed, as `(ranges, units)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.ranges.len(), self.units.len())
    }
}

impl RollSource for ScriptedRolls {
    fn roll_range(&mut self, low: u32, high: u32) -> u32 {
        self.ranges
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }

    fn roll_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.99)
    }
}
