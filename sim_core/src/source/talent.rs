//! TalentSource - Stats from selected talent nodes

use crate::catalog::TalentNodeDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::StatMap;
use std::collections::{BTreeMap, HashMap};

/// Stats from talent selections, resolved against the node catalog
///
/// Tree structure and prerequisites are an editor concern; this only cares
/// about "which nodes, at what rank, give what stats".
#[derive(Debug, Clone, Default)]
pub struct TalentSource {
    bonuses: StatMap,
}

impl TalentSource {
    /// Resolve selected ranks into per-stat bonuses
    ///
    /// Unknown node ids and nodes without a recognised stat are skipped.
    /// Ranks are clamped to `[0, max_rank]`.
    pub fn resolve(
        nodes: &HashMap<String, TalentNodeDefinition>,
        selected: &BTreeMap<String, i64>,
    ) -> Self {
        let mut bonuses = StatMap::new();
        for (node_id, &rank) in selected {
            let Some(node) = nodes.get(node_id) else {
                continue;
            };
            let Some(stat) = node.stat else {
                continue;
            };
            *bonuses.entry(stat).or_insert(0.0) += node.bonus_at(rank);
        }
        TalentSource { bonuses }
    }

    /// Total bonus per stat
    pub fn bonuses(&self) -> &StatMap {
        &self.bonuses
    }
}

impl StatSource for TalentSource {
    fn id(&self) -> &str {
        "talents"
    }

    fn priority(&self) -> i32 {
        100 // Talents apply after pet and artifact
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_all(&self.bonuses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    fn nodes() -> HashMap<String, TalentNodeDefinition> {
        [
            TalentNodeDefinition::new("t1", Stat::Attack, 10.0, 5),
            TalentNodeDefinition::new("t2", Stat::Attack, 4.0, 3),
            TalentNodeDefinition::new("t3", Stat::CritChance, 0.01, 2),
        ]
        .into_iter()
        .map(|n| (n.id.clone(), n))
        .collect()
    }

    #[test]
    fn test_ranks_accumulate_per_stat() {
        let selected = BTreeMap::from([("t1".to_string(), 3), ("t2".to_string(), 2)]);
        let source = TalentSource::resolve(&nodes(), &selected);
        assert!((source.bonuses()[&Stat::Attack] - 38.0).abs() < f64::EPSILON);
        assert!(!source.bonuses().contains_key(&Stat::CritChance));
    }

    #[test]
    fn test_rank_is_clamped() {
        let selected = BTreeMap::from([("t3".to_string(), 10), ("t1".to_string(), -4)]);
        let source = TalentSource::resolve(&nodes(), &selected);
        assert!((source.bonuses()[&Stat::CritChance] - 0.02).abs() < 1e-12);
        assert_eq!(source.bonuses()[&Stat::Attack], 0.0);
    }

    #[test]
    fn test_unknown_node_is_skipped() {
        let selected = BTreeMap::from([("ghost".to_string(), 5)]);
        let source = TalentSource::resolve(&nodes(), &selected);
        assert!(source.bonuses().is_empty());
    }

    #[test]
    fn test_talent_priority() {
        assert_eq!(TalentSource::default().priority(), 100);
    }
}
