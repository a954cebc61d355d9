//! StatAccumulator - Collects stat modifications before freezing a StatBlock

use crate::stat_block::StatBlock;
use crate::types::{Stat, StatMap, STAT_COUNT};

/// Accumulates stat modifications from various sources
///
/// Starts from the vocabulary defaults. Sources either overlay a value
/// (`set`) or add to it (`add`); all stacking here is additive.
#[derive(Debug, Clone)]
pub struct StatAccumulator {
    values: [f64; STAT_COUNT],
}

impl Default for StatAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatAccumulator {
    /// Create an accumulator holding the default value of every stat
    pub fn new() -> Self {
        let mut values = [0.0; STAT_COUNT];
        for stat in Stat::all() {
            values[stat.index()] = stat.default_value();
        }
        StatAccumulator { values }
    }

    /// Current value of a stat
    pub fn get(&self, stat: Stat) -> f64 {
        self.values[stat.index()]
    }

    /// Replace a stat's value
    pub fn set(&mut self, stat: Stat, value: f64) {
        self.values[stat.index()] = value;
    }

    /// Add to a stat's value
    pub fn add(&mut self, stat: Stat, value: f64) {
        self.values[stat.index()] += value;
    }

    /// Add every entry of a bonus map
    pub fn add_all(&mut self, bonuses: &StatMap) {
        for (&stat, &value) in bonuses {
            self.add(stat, value);
        }
    }

    /// Freeze the accumulated values
    pub fn finish(self) -> StatBlock {
        StatBlock::from_values(self.values)
    }
}
