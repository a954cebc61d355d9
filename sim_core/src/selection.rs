//! BuildSelection - one combatant's chosen hero, gear and talents

use crate::types::{Stat, StatMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A combatant's configuration for one simulation request
///
/// Artifact and pet are genuinely optional; an id that does not resolve in
/// the catalog contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSelection {
    pub hero_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_id: Option<String>,
    /// Talent node id -> requested rank (clamped to the node's range on use)
    #[serde(default)]
    pub selected_talents: BTreeMap<String, i64>,
    /// Free-form manual additions, applied last
    #[serde(default)]
    pub extra_bonuses: StatMap,
}

impl BuildSelection {
    /// Create a selection with only a hero
    pub fn new(hero_id: impl Into<String>) -> Self {
        BuildSelection {
            hero_id: hero_id.into(),
            ..Default::default()
        }
    }

    pub fn with_artifact(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    pub fn with_pet(mut self, pet_id: impl Into<String>) -> Self {
        self.pet_id = Some(pet_id.into());
        self
    }

    /// Select a talent node at the given rank (replaces any previous rank)
    pub fn with_talent(mut self, node_id: impl Into<String>, rank: i64) -> Self {
        self.selected_talents.insert(node_id.into(), rank);
        self
    }

    /// Add a manual bonus; repeated calls on one stat accumulate
    pub fn with_bonus(mut self, stat: Stat, value: f64) -> Self {
        *self.extra_bonuses.entry(stat).or_insert(0.0) += value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let build = BuildSelection::new("hero_a")
            .with_artifact("art_1")
            .with_talent("t1", 3)
            .with_bonus(Stat::Attack, 50.0)
            .with_bonus(Stat::Attack, 25.0);

        assert_eq!(build.hero_id, "hero_a");
        assert_eq!(build.artifact_id.as_deref(), Some("art_1"));
        assert_eq!(build.pet_id, None);
        assert_eq!(build.selected_talents["t1"], 3);
        assert!((build.extra_bonuses[&Stat::Attack] - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_toml_selection() {
        let build: BuildSelection = toml::from_str(
            r#"
hero_id = "attacker_demo"
pet_id = "pet_demo"

[selected_talents]
t1 = 3

[extra_bonuses]
crit_chance = 0.1
"#,
        )
        .unwrap();

        assert_eq!(build.pet_id.as_deref(), Some("pet_demo"));
        assert_eq!(build.artifact_id, None);
        assert!((build.extra_bonuses[&Stat::CritChance] - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_manual_stat_is_rejected() {
        let parsed: Result<BuildSelection, _> = toml::from_str(
            r#"
hero_id = "x"

[extra_bonuses]
mana = 5.0
"#,
        );
        assert!(parsed.is_err());
    }
}
