//! StatBlock - Resolved combatant stats from all sources

mod aggregator;
mod computed;
mod resolver;

pub use aggregator::StatAccumulator;
pub use resolver::{resolve_stats, StatResolver};

use crate::source::StatSource;
use crate::types::{Stat, StatMap, STAT_COUNT};
use serde::{Deserialize, Serialize};

/// Final numeric stats for one combatant
///
/// Every stat in the vocabulary is always present. A StatBlock is never
/// changed in place during a fight; live values are produced by overlaying
/// modifier snapshots onto a copy (`with_overlay`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StatMap", into = "StatMap")]
pub struct StatBlock {
    values: [f64; STAT_COUNT],
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl From<StatMap> for StatBlock {
    /// Stats missing from the map take their defaults
    fn from(map: StatMap) -> Self {
        let mut acc = StatAccumulator::new();
        for (stat, value) in map {
            acc.set(stat, value);
        }
        acc.finish()
    }
}

impl From<StatBlock> for StatMap {
    fn from(block: StatBlock) -> Self {
        block.iter().collect()
    }
}

impl StatBlock {
    /// Create a StatBlock holding only default values
    pub fn new() -> Self {
        StatAccumulator::new().finish()
    }

    pub(crate) fn from_values(values: [f64; STAT_COUNT]) -> Self {
        StatBlock { values }
    }

    /// Build from an arbitrary set of sources, applied in priority order
    ///
    /// Sources with equal priority keep their relative order.
    pub fn from_sources(sources: &[&dyn StatSource]) -> Self {
        let mut sorted: Vec<&dyn StatSource> = sources.to_vec();
        sorted.sort_by_key(|s| s.priority());

        let mut accumulator = StatAccumulator::new();
        for source in sorted {
            source.apply(&mut accumulator);
        }
        accumulator.finish()
    }

    /// Value of one stat
    pub fn get(&self, stat: Stat) -> f64 {
        self.values[stat.index()]
    }

    /// Copy with one stat replaced
    pub fn with_value(mut self, stat: Stat, value: f64) -> Self {
        self.values[stat.index()] = value;
        self
    }

    /// Copy with each overlay entry added to the matching stat
    pub fn with_overlay(mut self, overlay: &StatMap) -> Self {
        for (&stat, &value) in overlay {
            self.values[stat.index()] += value;
        }
        self
    }

    /// Iterate every (stat, value) pair in vocabulary order
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::all().iter().map(move |&stat| (stat, self.get(stat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StatSource;

    struct Fixed(&'static str, i32, Stat, f64, bool);

    impl StatSource for Fixed {
        fn id(&self) -> &str {
            self.0
        }
        fn priority(&self) -> i32 {
            self.1
        }
        fn apply(&self, stats: &mut StatAccumulator) {
            if self.4 {
                stats.set(self.2, self.3);
            } else {
                stats.add(self.2, self.3);
            }
        }
    }

    #[test]
    fn test_every_stat_present_with_defaults() {
        let block = StatBlock::new();
        assert_eq!(block.iter().count(), STAT_COUNT);
        assert!((block.get(Stat::CritDamage) - 1.5).abs() < f64::EPSILON);
        assert_eq!(block.get(Stat::Shield), 0.0);
    }

    #[test]
    fn test_sources_apply_in_priority_order() {
        // The overlay has the lowest priority, so the additive source lands on top of it
        let add = Fixed("add", 0, Stat::Attack, 10.0, false);
        let overlay = Fixed("base", -100, Stat::Attack, 100.0, true);
        let block = StatBlock::from_sources(&[&add, &overlay]);
        assert!((block.attack() - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlay_leaves_base_untouched() {
        let base = StatBlock::new().with_value(Stat::Attack, 100.0);
        let live = base.with_overlay(&StatMap::from([(Stat::Attack, 50.0)]));
        assert!((live.attack() - 150.0).abs() < f64::EPSILON);
        assert!((base.attack() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_as_map() {
        let block = StatBlock::new().with_value(Stat::Attack, 12.0);
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"attack\":12.0"));

        let parsed: StatBlock = serde_json::from_str(r#"{"defense": 5.0}"#).unwrap();
        assert!((parsed.defense() - 5.0).abs() < f64::EPSILON);
        assert!((parsed.get(Stat::CritDamage) - 1.5).abs() < f64::EPSILON);
    }
}
