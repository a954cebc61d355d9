//! Computed/derived stat values with the engine's clamping policy

use crate::defense::constants::MAX_DAMAGE_REDUCTION;
use crate::stat_block::StatBlock;
use crate::types::Stat;

impl StatBlock {
    pub fn attack(&self) -> f64 {
        self.get(Stat::Attack)
    }

    pub fn defense(&self) -> f64 {
        self.get(Stat::Defense)
    }

    pub fn shield(&self) -> f64 {
        self.get(Stat::Shield)
    }

    pub fn rage_bonus(&self) -> f64 {
        self.get(Stat::RageBonus)
    }

    /// Crit chance clamped to `[0, 1]`
    pub fn effective_crit_chance(&self) -> f64 {
        self.get(Stat::CritChance).clamp(0.0, 1.0)
    }

    /// Crit damage multiplier, never below 1.0
    pub fn effective_crit_damage(&self) -> f64 {
        self.get(Stat::CritDamage).max(1.0)
    }

    /// Damage reduction clamped to `[0, MAX_DAMAGE_REDUCTION]`
    pub fn effective_damage_reduction(&self) -> f64 {
        self.get(Stat::DamageReduction).clamp(0.0, MAX_DAMAGE_REDUCTION)
    }

    pub fn skill_damage_bonus(&self) -> f64 {
        self.get(Stat::SkillDamageBonus)
    }

    pub fn all_damage_bonus(&self) -> f64 {
        self.get(Stat::AllDamageBonus)
    }
}
