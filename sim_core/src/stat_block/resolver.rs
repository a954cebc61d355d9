//! StatResolver - Turns a build selection into a StatBlock

use crate::catalog::{ArtifactDefinition, Catalog, HeroDefinition, PetDefinition, TalentNodeDefinition};
use crate::error::SimError;
use crate::selection::BuildSelection;
use crate::source::{ArtifactSource, HeroSource, ManualSource, PetSource, StatSource, TalentSource};
use crate::stat_block::StatBlock;
use std::collections::HashMap;

/// Resolve one combatant's stats from already looked-up catalog entries
///
/// Order: defaults, hero base stats (overlay), then additively pet,
/// artifact main + secondary, talents, manual extra bonuses.
pub fn resolve_stats(
    hero: &HeroDefinition,
    artifact: Option<&ArtifactDefinition>,
    pet: Option<&PetDefinition>,
    talents: &HashMap<String, TalentNodeDefinition>,
    build: &BuildSelection,
) -> StatBlock {
    let hero_source = HeroSource::new(hero);
    let pet_source = pet.map(PetSource::new);
    let artifact_source = artifact.map(ArtifactSource::new);
    let talent_source = TalentSource::resolve(talents, &build.selected_talents);
    let manual_source = ManualSource::new(&build.extra_bonuses);

    let mut sources: Vec<&dyn StatSource> = vec![&hero_source];
    if let Some(ref source) = pet_source {
        sources.push(source);
    }
    if let Some(ref source) = artifact_source {
        sources.push(source);
    }
    sources.push(&talent_source);
    sources.push(&manual_source);

    StatBlock::from_sources(&sources)
}

/// Resolves builds against a catalog
pub struct StatResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> StatResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        StatResolver { catalog }
    }

    /// Resolve a build; only a missing hero is an error
    pub fn resolve(&self, build: &BuildSelection) -> Result<StatBlock, SimError> {
        let hero = self.catalog.require_hero(&build.hero_id)?;
        Ok(resolve_stats(
            hero,
            self.catalog.artifact(build.artifact_id.as_deref()),
            self.catalog.pet(build.pet_id.as_deref()),
            &self.catalog.talents,
            build,
        ))
    }
}
