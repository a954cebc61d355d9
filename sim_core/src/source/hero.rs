//! HeroSource - A hero's catalog base stats

use crate::catalog::HeroDefinition;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Base stats from the hero definition
///
/// Unlike every other source this one overlays: a hero that defines
/// `crit_damage` replaces the 1.5 default instead of adding to it.
pub struct HeroSource<'a> {
    pub hero: &'a HeroDefinition,
}

impl<'a> HeroSource<'a> {
    pub fn new(hero: &'a HeroDefinition) -> Self {
        HeroSource { hero }
    }
}

impl StatSource for HeroSource<'_> {
    fn id(&self) -> &str {
        &self.hero.id
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (&stat, &value) in &self.hero.base_stats {
            stats.set(stat, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    #[test]
    fn test_hero_overlays_defaults() {
        let hero = HeroDefinition::new("h")
            .with_stat(Stat::Attack, 1000.0)
            .with_stat(Stat::CritDamage, 2.0);
        let mut acc = StatAccumulator::new();
        acc.add(Stat::CritDamage, 0.25);
        HeroSource::new(&hero).apply(&mut acc);

        assert!((acc.get(Stat::Attack) - 1000.0).abs() < f64::EPSILON);
        assert!((acc.get(Stat::CritDamage) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hero_priority() {
        let hero = HeroDefinition::new("h");
        assert_eq!(HeroSource::new(&hero).priority(), -100);
    }
}
