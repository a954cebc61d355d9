//! ArtifactSource - Main and secondary stats from an artifact

use crate::catalog::ArtifactDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

pub struct ArtifactSource<'a> {
    pub artifact: &'a ArtifactDefinition,
}

impl<'a> ArtifactSource<'a> {
    pub fn new(artifact: &'a ArtifactDefinition) -> Self {
        ArtifactSource { artifact }
    }
}

impl StatSource for ArtifactSource<'_> {
    fn id(&self) -> &str {
        &self.artifact.id
    }

    fn priority(&self) -> i32 {
        10 // After pet
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        if let Some(main) = self.artifact.main_stat {
            stats.add(main.stat, main.value);
        }
        stats.add_all(&self.artifact.secondary_stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MainStat;
    use crate::types::{Stat, StatMap};

    #[test]
    fn test_main_and_secondary_stack() {
        let artifact = ArtifactDefinition {
            id: "art".to_string(),
            name: "Art".to_string(),
            rarity: "Epic".to_string(),
            main_stat: Some(MainStat {
                stat: Stat::Attack,
                value: 120.0,
            }),
            secondary_stats: StatMap::from([(Stat::Attack, 30.0), (Stat::CritChance, 0.05)]),
        };

        let mut acc = StatAccumulator::new();
        ArtifactSource::new(&artifact).apply(&mut acc);

        assert!((acc.get(Stat::Attack) - 150.0).abs() < f64::EPSILON);
        assert!((acc.get(Stat::CritChance) - 0.05).abs() < f64::EPSILON);
    }
}
