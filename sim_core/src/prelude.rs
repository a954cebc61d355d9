//! Prelude module for convenient imports
//!
//! ```rust
//! use sim_core::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{StatBlock, StatResolver};
pub use crate::types::{EffectTarget, Stat, StatMap};

// Catalog and inputs
pub use crate::catalog::{
    ArtifactDefinition, Catalog, HeroDefinition, PetDefinition, SkillEffect, TalentNodeDefinition,
};
pub use crate::config::{load_scenario, Scenario, SimulationConfig};
pub use crate::selection::BuildSelection;

// Combat
pub use crate::combat::{run_monte_carlo, CombatSimulator, SimulationResult, TickRecord};

// Errors
pub use crate::error::SimError;
