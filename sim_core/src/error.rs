//! Crate-level error type

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced before or while setting up a simulation
///
/// Running a simulation never fails; everything here is a precondition
/// problem with the inputs.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown hero id: {0}")]
    UnknownHero(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
