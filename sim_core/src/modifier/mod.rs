//! Timed modifiers - short-lived additive buffs and debuffs on one side

use crate::types::{Stat, StatMap};
use serde::{Deserialize, Serialize};

/// One active buff/debuff instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedModifier {
    pub stat: Stat,
    pub value: f64,
    /// Whole seconds left before expiry
    pub remaining_s: u32,
}

impl TimedModifier {
    /// Advance one second; returns true while the modifier is still live
    pub fn tick(&mut self) -> bool {
        self.remaining_s = self.remaining_s.saturating_sub(1);
        self.remaining_s > 0
    }
}

/// Ledger of timed modifiers for one combatant side
///
/// Modifiers on the same stat never merge: each keeps its own countdown.
#[derive(Debug, Clone, Default)]
pub struct ModifierManager {
    modifiers: Vec<TimedModifier>,
}

impl ModifierManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a modifier lasting `duration_s` ticks; zero duration is a no-op
    pub fn add(&mut self, stat: Stat, value: f64, duration_s: u32) {
        if duration_s == 0 {
            return;
        }
        self.modifiers.push(TimedModifier {
            stat,
            value,
            remaining_s: duration_s,
        });
    }

    /// Count every modifier down by one second and drop the expired ones
    pub fn tick(&mut self) {
        self.modifiers.retain_mut(TimedModifier::tick);
    }

    /// Sum of live values per stat; stats without a modifier are absent
    pub fn snapshot(&self) -> StatMap {
        let mut out = StatMap::new();
        for modifier in &self.modifiers {
            *out.entry(modifier.stat).or_insert(0.0) += modifier.value;
        }
        out
    }

    /// All live modifiers
    pub fn active(&self) -> &[TimedModifier] {
        &self.modifiers
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_is_noop() {
        let mut mods = ModifierManager::new();
        mods.add(Stat::Attack, 100.0, 0);
        assert!(mods.is_empty());
        assert!(mods.snapshot().is_empty());
    }

    #[test]
    fn test_same_stat_coexists() {
        let mut mods = ModifierManager::new();
        mods.add(Stat::Attack, 100.0, 1);
        mods.add(Stat::Attack, 50.0, 3);
        assert_eq!(mods.len(), 2);
        assert!((mods.snapshot()[&Stat::Attack] - 150.0).abs() < f64::EPSILON);

        mods.tick();
        assert_eq!(mods.len(), 1);
        assert!((mods.snapshot()[&Stat::Attack] - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_present_for_exactly_duration_ticks() {
        for duration in 1..=5u32 {
            let mut mods = ModifierManager::new();
            mods.add(Stat::Defense, 10.0, duration);

            // Visible after each of the first `duration - 1` ticks, gone after tick `duration`
            for tick in 1..=duration {
                assert!(
                    mods.snapshot().contains_key(&Stat::Defense),
                    "missing before tick {tick} with duration {duration}"
                );
                mods.tick();
            }
            assert!(mods.snapshot().is_empty());
        }
    }

    #[test]
    fn test_snapshot_groups_by_stat() {
        let mut mods = ModifierManager::new();
        mods.add(Stat::Attack, 10.0, 2);
        mods.add(Stat::CritChance, 0.1, 2);
        mods.add(Stat::Attack, -4.0, 2);

        let snap = mods.snapshot();
        assert_eq!(snap.len(), 2);
        assert!((snap[&Stat::Attack] - 6.0).abs() < f64::EPSILON);
        assert!(!snap.contains_key(&Stat::Shield));
    }
}
