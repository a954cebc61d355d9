//! Tolerant deserializers for upstream catalog data
//!
//! Catalog files are produced by a spreadsheet export and may carry stat
//! names this engine does not model, `null` where a map is expected, or
//! skill effect kinds that do not exist yet. None of those should make a
//! whole catalog unloadable: unknown entries are skipped with a warning.

use super::definitions::{BuffEffect, MainStat, SkillEffect};
use crate::types::{EffectTarget, Stat, StatMap};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use tracing::warn;

/// `{ "attack": 100, "mana": 5 }` -> StatMap with `mana` dropped
pub fn stat_map<'de, D>(deserializer: D) -> Result<StatMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, f64>> = Option::deserialize(deserializer)?;
    let mut out = StatMap::new();
    for (name, value) in raw.unwrap_or_default() {
        match name.parse::<Stat>() {
            Ok(stat) => *out.entry(stat).or_insert(0.0) += value,
            Err(e) => warn!("skipping catalog bonus: {e}"),
        }
    }
    Ok(out)
}

#[derive(Deserialize)]
struct RawMainStat {
    #[serde(default)]
    stat: Option<String>,
    #[serde(default)]
    value: Option<f64>,
}

/// `{ "stat": "attack", "value": 120 }`; a missing or unknown stat yields `None`
pub fn main_stat<'de, D>(deserializer: D) -> Result<Option<MainStat>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawMainStat> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let Some(name) = raw.stat.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match name.parse::<Stat>() {
        Ok(stat) => Ok(Some(MainStat {
            stat,
            value: raw.value.unwrap_or(0.0),
        })),
        Err(e) => {
            warn!("skipping artifact main stat: {e}");
            Ok(None)
        }
    }
}

#[derive(Deserialize)]
struct RawSkillEffect {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    target: Option<EffectTarget>,
    #[serde(default)]
    stat: Option<String>,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    duration_s: Option<f64>,
}

impl RawSkillEffect {
    fn into_effect(self) -> SkillEffect {
        match self.kind.as_deref() {
            Some("buff") => {
                let stat = self.stat.filter(|s| !s.is_empty()).and_then(|name| {
                    name.parse::<Stat>()
                        .map_err(|e| warn!("buff effect has {e}; it will be ignored"))
                        .ok()
                });
                SkillEffect::Buff(BuffEffect {
                    target: self.target.unwrap_or_default(),
                    stat,
                    value: self.value.unwrap_or(0.0),
                    // Durations are whole seconds; fractional input truncates
                    duration_s: self.duration_s.map(|d| d.trunc() as i64).unwrap_or(0),
                })
            }
            other => {
                warn!("unrecognized skill effect kind {:?}", other.unwrap_or(""));
                SkillEffect::Unknown
            }
        }
    }
}

/// Ordered list of effect descriptors; unknown kinds become `SkillEffect::Unknown`
pub fn skill_effects<'de, D>(deserializer: D) -> Result<Vec<SkillEffect>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<RawSkillEffect>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(RawSkillEffect::into_effect)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "stat_map")]
        stats: StatMap,
        #[serde(default, deserialize_with = "skill_effects")]
        effects: Vec<SkillEffect>,
        #[serde(default, deserialize_with = "main_stat")]
        main: Option<MainStat>,
    }

    #[test]
    fn test_unknown_stats_are_dropped() {
        let h: Holder =
            serde_json::from_str(r#"{"stats": {"attack": 10, "mana": 3, "defense": 2}}"#).unwrap();
        assert_eq!(h.stats.len(), 2);
        assert!((h.stats[&Stat::Attack] - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_map_is_empty() {
        let h: Holder = serde_json::from_str(r#"{"stats": null, "effects": null}"#).unwrap();
        assert!(h.stats.is_empty());
        assert!(h.effects.is_empty());
        assert!(h.main.is_none());
    }

    #[test]
    fn test_effect_kinds() {
        let h: Holder = serde_json::from_str(
            r#"{"effects": [
                {"type": "buff", "stat": "attack", "value": 100, "duration_s": 3},
                {"type": "heal", "value": 500},
                {"type": "buff", "target": "defender", "stat": "nonsense", "duration_s": 2}
            ]}"#,
        )
        .unwrap();

        assert_eq!(h.effects.len(), 3);
        assert_eq!(
            h.effects[0],
            SkillEffect::Buff(BuffEffect {
                target: EffectTarget::Attacker,
                stat: Some(Stat::Attack),
                value: 100.0,
                duration_s: 3,
            })
        );
        assert_eq!(h.effects[1], SkillEffect::Unknown);
        match &h.effects[2] {
            SkillEffect::Buff(b) => {
                assert_eq!(b.target, EffectTarget::Defender);
                assert_eq!(b.stat, None);
            }
            other => panic!("expected buff, got {other:?}"),
        }
    }

    #[test]
    fn test_main_stat() {
        let h: Holder =
            serde_json::from_str(r#"{"main": {"stat": "attack", "value": 120}}"#).unwrap();
        let main = h.main.unwrap();
        assert_eq!(main.stat, Stat::Attack);
        assert!((main.value - 120.0).abs() < f64::EPSILON);

        let h: Holder = serde_json::from_str(r#"{"main": {}}"#).unwrap();
        assert!(h.main.is_none());
    }
}
