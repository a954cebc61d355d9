//! Catalog - static entity definitions the engine resolves builds against

mod definitions;
mod lenient;
mod loader;

pub use definitions::{
    ArtifactDefinition, BuffEffect, HeroDefinition, MainStat, PetDefinition, SkillEffect,
    TalentNodeDefinition,
};
pub use loader::{load_artifacts, load_heroes, load_pets, load_talents, parse_heroes, CatalogError};

use crate::error::SimError;
use std::collections::HashMap;
use std::path::Path;

/// All entity catalogs, each keyed by string id
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub heroes: HashMap<String, HeroDefinition>,
    pub artifacts: HashMap<String, ArtifactDefinition>,
    pub pets: HashMap<String, PetDefinition>,
    pub talents: HashMap<String, TalentNodeDefinition>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `heroes.json`, `artifacts.json`, `pets.json` and `talents.json` from a directory
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let catalog = Catalog {
            heroes: load_heroes(&dir.join("heroes.json"))?,
            artifacts: load_artifacts(&dir.join("artifacts.json"))?,
            pets: load_pets(&dir.join("pets.json"))?,
            talents: load_talents(&dir.join("talents.json"))?,
        };
        tracing::info!(
            heroes = catalog.heroes.len(),
            artifacts = catalog.artifacts.len(),
            pets = catalog.pets.len(),
            talents = catalog.talents.len(),
            "loaded catalog from {}",
            dir.display()
        );
        Ok(catalog)
    }

    pub fn insert_hero(&mut self, hero: HeroDefinition) {
        self.heroes.insert(hero.id.clone(), hero);
    }

    pub fn insert_artifact(&mut self, artifact: ArtifactDefinition) {
        self.artifacts.insert(artifact.id.clone(), artifact);
    }

    pub fn insert_pet(&mut self, pet: PetDefinition) {
        self.pets.insert(pet.id.clone(), pet);
    }

    pub fn insert_talent(&mut self, talent: TalentNodeDefinition) {
        self.talents.insert(talent.id.clone(), talent);
    }

    pub fn hero(&self, id: &str) -> Option<&HeroDefinition> {
        self.heroes.get(id)
    }

    /// Look up a hero a build depends on; absence is fatal
    pub fn require_hero(&self, id: &str) -> Result<&HeroDefinition, SimError> {
        self.heroes
            .get(id)
            .ok_or_else(|| SimError::UnknownHero(id.to_string()))
    }

    /// Optional artifact lookup; `None` id and unknown id both yield `None`
    pub fn artifact(&self, id: Option<&str>) -> Option<&ArtifactDefinition> {
        id.and_then(|id| self.artifacts.get(id))
    }

    /// Optional pet lookup; `None` id and unknown id both yield `None`
    pub fn pet(&self, id: Option<&str>) -> Option<&PetDefinition> {
        id.and_then(|id| self.pets.get(id))
    }

    pub fn talent(&self, id: &str) -> Option<&TalentNodeDefinition> {
        self.talents.get(id)
    }

    /// Hero ids in sorted order (stable for menus and reports)
    pub fn hero_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.heroes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
