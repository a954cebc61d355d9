//! Static catalog entries: heroes, artifacts, pets and talent nodes

use super::lenient;
use crate::types::{EffectTarget, Stat, StatMap};
use serde::{Deserialize, Serialize};

/// A playable hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    /// Rage needed for one skill cast
    #[serde(default = "default_rage_cost")]
    pub rage_cost: u32,
    #[serde(default, deserialize_with = "lenient::stat_map")]
    pub base_stats: StatMap,
    /// Skill damage in per-mille of attack
    #[serde(default)]
    pub skill_factor: f64,
    /// Applied in order after every skill cast
    #[serde(default, deserialize_with = "lenient::skill_effects")]
    pub skill_effects: Vec<SkillEffect>,
}

impl HeroDefinition {
    /// Create a hero with the catalog defaults
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        HeroDefinition {
            name: id.clone(),
            id,
            rarity: default_rarity(),
            rage_cost: default_rage_cost(),
            base_stats: StatMap::new(),
            skill_factor: 0.0,
            skill_effects: Vec::new(),
        }
    }

    pub fn with_stat(mut self, stat: Stat, value: f64) -> Self {
        self.base_stats.insert(stat, value);
        self
    }

    pub fn with_skill_factor(mut self, skill_factor: f64) -> Self {
        self.skill_factor = skill_factor;
        self
    }

    pub fn with_rage_cost(mut self, rage_cost: u32) -> Self {
        self.rage_cost = rage_cost;
        self
    }

    pub fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.skill_effects.push(effect);
        self
    }

    /// Skill base multiplier as a fraction of attack
    pub fn skill_multiplier(&self) -> f64 {
        self.skill_factor / 1000.0
    }
}

/// The artifact's headline bonus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MainStat {
    pub stat: Stat,
    pub value: f64,
}

/// Equippable artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default, deserialize_with = "lenient::main_stat")]
    pub main_stat: Option<MainStat>,
    #[serde(default, deserialize_with = "lenient::stat_map")]
    pub secondary_stats: StatMap,
}

/// Companion pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default, deserialize_with = "lenient::stat_map")]
    pub bonuses: StatMap,
}

/// One node of a talent tree
///
/// Only `stat`, `value_per_rank` and `max_rank` matter to the engine; the
/// rest is presentation metadata for tree editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentNodeDefinition {
    pub id: String,
    /// `None` when the catalog names a stat outside the vocabulary
    #[serde(default, deserialize_with = "lenient_stat")]
    pub stat: Option<Stat>,
    #[serde(default)]
    pub value_per_rank: f64,
    #[serde(default = "default_max_rank")]
    pub max_rank: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_tree")]
    pub tree: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub prereq: Vec<String>,
}

impl TalentNodeDefinition {
    pub fn new(id: impl Into<String>, stat: Stat, value_per_rank: f64, max_rank: u32) -> Self {
        TalentNodeDefinition {
            id: id.into(),
            stat: Some(stat),
            value_per_rank,
            max_rank,
            name: String::new(),
            description: String::new(),
            tree: default_tree(),
            x: 0.0,
            y: 0.0,
            prereq: Vec::new(),
        }
    }

    /// Clamp a requested rank into `[0, max_rank]`
    pub fn clamp_rank(&self, rank: i64) -> u32 {
        rank.clamp(0, i64::from(self.max_rank)) as u32
    }

    /// Bonus granted at the requested rank
    pub fn bonus_at(&self, rank: i64) -> f64 {
        self.value_per_rank * f64::from(self.clamp_rank(rank))
    }
}

/// Post-cast effect attached to a hero's skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SkillEffect {
    /// Timed additive stat change on one side
    Buff(BuffEffect),
    /// A kind this engine does not model yet
    #[serde(other)]
    Unknown,
}

/// Payload of a buff effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffEffect {
    #[serde(default)]
    pub target: EffectTarget,
    #[serde(default)]
    pub stat: Option<Stat>,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub duration_s: i64,
}

impl BuffEffect {
    /// Stat and duration this buff applies, or `None` when it has no effect
    pub fn applicable(&self) -> Option<(Stat, u32)> {
        let stat = self.stat?;
        if self.duration_s <= 0 {
            return None;
        }
        let duration = u32::try_from(self.duration_s).unwrap_or(u32::MAX);
        Some((stat, duration))
    }
}

fn lenient_stat<'de, D>(deserializer: D) -> Result<Option<Stat>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|name| {
        name.parse::<Stat>()
            .map_err(|e| tracing::warn!("talent node has {e}; it grants nothing"))
            .ok()
    }))
}

fn default_rarity() -> String {
    "Unknown".to_string()
}
fn default_rage_cost() -> u32 {
    1000
}
fn default_max_rank() -> u32 {
    1
}
fn default_tree() -> String {
    "General".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_defaults() {
        let hero: HeroDefinition = serde_json::from_str(r#"{"id": "h1"}"#).unwrap();
        assert_eq!(hero.rage_cost, 1000);
        assert_eq!(hero.rarity, "Unknown");
        assert!(hero.base_stats.is_empty());
        assert!(hero.skill_effects.is_empty());
    }

    #[test]
    fn test_talent_rank_clamp() {
        let node = TalentNodeDefinition::new("t1", Stat::Attack, 10.0, 5);
        assert_eq!(node.clamp_rank(-3), 0);
        assert_eq!(node.clamp_rank(3), 3);
        assert_eq!(node.clamp_rank(99), 5);
        assert!((node.bonus_at(99) - 50.0).abs() < f64::EPSILON);
        assert_eq!(node.bonus_at(-1), 0.0);
    }

    #[test]
    fn test_talent_metadata_defaults() {
        let node: TalentNodeDefinition =
            serde_json::from_str(r#"{"id": "t9", "stat": "defense", "value_per_rank": 4}"#)
                .unwrap();
        assert_eq!(node.stat, Some(Stat::Defense));
        assert_eq!(node.max_rank, 1);
        assert_eq!(node.tree, "General");
        assert!(node.prereq.is_empty());
    }

    #[test]
    fn test_buff_applicability() {
        let mut buff = BuffEffect {
            target: EffectTarget::Attacker,
            stat: Some(Stat::Attack),
            value: 50.0,
            duration_s: 3,
        };
        assert_eq!(buff.applicable(), Some((Stat::Attack, 3)));

        buff.duration_s = 0;
        assert_eq!(buff.applicable(), None);

        buff.duration_s = 3;
        buff.stat = None;
        assert_eq!(buff.applicable(), None);
    }

    #[test]
    fn test_skill_multiplier() {
        let hero = HeroDefinition::new("h").with_skill_factor(1500.0);
        assert!((hero.skill_multiplier() - 1.5).abs() < f64::EPSILON);
    }
}
