//! JSON catalog loading
//!
//! Each file holds one top-level array named after the entity kind, e.g.
//! `{ "heroes": [ { "id": "...", ... } ] }`.

use super::definitions::{ArtifactDefinition, HeroDefinition, PetDefinition, TalentNodeDefinition};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct HeroesFile {
    #[serde(default)]
    heroes: Vec<HeroDefinition>,
}

#[derive(Deserialize)]
struct ArtifactsFile {
    #[serde(default)]
    artifacts: Vec<ArtifactDefinition>,
}

#[derive(Deserialize)]
struct PetsFile {
    #[serde(default)]
    pets: Vec<PetDefinition>,
}

#[derive(Deserialize)]
struct TalentsFile {
    #[serde(default)]
    talents: Vec<TalentNodeDefinition>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Key entries by id; later duplicates replace earlier ones
fn index_by_id<T>(entries: Vec<T>, id: impl Fn(&T) -> &str) -> HashMap<String, T> {
    entries
        .into_iter()
        .map(|entry| (id(&entry).to_string(), entry))
        .collect()
}

pub fn load_heroes(path: &Path) -> Result<HashMap<String, HeroDefinition>, CatalogError> {
    parse_heroes(&fs::read_to_string(path)?)
}

pub fn load_artifacts(path: &Path) -> Result<HashMap<String, ArtifactDefinition>, CatalogError> {
    let file: ArtifactsFile = read_json(path)?;
    let artifacts = file
        .artifacts
        .into_iter()
        .map(|mut a| {
            if a.name.is_empty() {
                a.name = a.id.clone();
            }
            a
        })
        .collect();
    Ok(index_by_id(artifacts, |a| &a.id))
}

pub fn load_pets(path: &Path) -> Result<HashMap<String, PetDefinition>, CatalogError> {
    let file: PetsFile = read_json(path)?;
    let pets = file
        .pets
        .into_iter()
        .map(|mut p| {
            if p.name.is_empty() {
                p.name = p.id.clone();
            }
            p
        })
        .collect();
    Ok(index_by_id(pets, |p| &p.id))
}

pub fn load_talents(path: &Path) -> Result<HashMap<String, TalentNodeDefinition>, CatalogError> {
    let file: TalentsFile = read_json(path)?;
    Ok(index_by_id(file.talents, |t| &t.id))
}

/// Parse a heroes document from a string
pub fn parse_heroes(content: &str) -> Result<HashMap<String, HeroDefinition>, CatalogError> {
    let file: HeroesFile = serde_json::from_str(content)?;
    let heroes = file
        .heroes
        .into_iter()
        .map(|mut h| {
            if h.name.is_empty() {
                h.name = h.id.clone();
            }
            h
        })
        .collect();
    Ok(index_by_id(heroes, |h| &h.id))
}
