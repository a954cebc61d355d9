//! Core types shared by the engine: the stat vocabulary and effect targets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The fixed stat vocabulary every combatant exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Attack,
    Defense,
    Health,
    /// Probability of a critical hit (0..=1 after clamping)
    CritChance,
    /// Multiplier applied on a critical hit (floored at 1.0)
    CritDamage,
    SkillDamageBonus,
    AllDamageBonus,
    /// Fraction of incoming damage removed (capped at 0.95)
    DamageReduction,
    /// Percentage bonus on every rage gain
    RageBonus,
    /// Starting damage-absorption pool
    Shield,
}

/// Number of stats in the vocabulary
pub const STAT_COUNT: usize = 10;

impl Stat {
    /// Get all stats in declaration order
    pub fn all() -> &'static [Stat; STAT_COUNT] {
        &[
            Stat::Attack,
            Stat::Defense,
            Stat::Health,
            Stat::CritChance,
            Stat::CritDamage,
            Stat::SkillDamageBonus,
            Stat::AllDamageBonus,
            Stat::DamageReduction,
            Stat::RageBonus,
            Stat::Shield,
        ]
    }

    /// Value a stat takes when no source sets it
    pub fn default_value(self) -> f64 {
        match self {
            Stat::CritDamage => 1.5,
            _ => 0.0,
        }
    }

    /// Position of this stat in `Stat::all()`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name used in catalogs and scenario files
    pub fn name(self) -> &'static str {
        match self {
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Health => "health",
            Stat::CritChance => "crit_chance",
            Stat::CritDamage => "crit_damage",
            Stat::SkillDamageBonus => "skill_damage_bonus",
            Stat::AllDamageBonus => "all_damage_bonus",
            Stat::DamageReduction => "damage_reduction",
            Stat::RageBonus => "rage_bonus",
            Stat::Shield => "shield",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a stat name is not part of the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stat: {0}")]
pub struct UnknownStat(pub String);

impl FromStr for Stat {
    type Err = UnknownStat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::all()
            .iter()
            .copied()
            .find(|stat| stat.name() == s)
            .ok_or_else(|| UnknownStat(s.to_string()))
    }
}

/// Sparse stat -> value mapping used for bonuses and modifier snapshots
pub type StatMap = BTreeMap<Stat, f64>;

/// Which side of the fight a skill effect lands on
///
/// Catalog data only distinguishes "attacker" from everything else, so any
/// other target name resolves to the defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectTarget {
    #[default]
    Attacker,
    Defender,
}

impl From<String> for EffectTarget {
    fn from(s: String) -> Self {
        if s == "attacker" {
            EffectTarget::Attacker
        } else {
            EffectTarget::Defender
        }
    }
}

impl From<EffectTarget> for String {
    fn from(target: EffectTarget) -> Self {
        match target {
            EffectTarget::Attacker => "attacker".to_string(),
            EffectTarget::Defender => "defender".to_string(),
        }
    }
}
