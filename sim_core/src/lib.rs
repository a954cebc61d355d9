//! sim_core - Combat simulation engine for hero builds
//!
//! This library provides:
//! - Catalog: hero, artifact, pet and talent definitions loaded from JSON
//! - StatResolver: turns a BuildSelection into a fixed-vocabulary StatBlock
//! - Damage formula: bonuses, reduction, defense mitigation and crits
//! - CombatSimulator: the tick loop with rage-gated skills, timed
//!   modifiers and a persistent defender shield
//! - Monte Carlo batches over stochastic runs

pub mod catalog;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod error;
pub mod modifier;
pub mod prelude;
pub mod rage;
pub mod selection;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Catalog, CatalogError, HeroDefinition, SkillEffect};
pub use combat::{
    run_monte_carlo, CombatSimulator, DamageBreakdown, MonteCarloSummary, SimulationResult,
    TickRecord,
};
pub use config::{ConfigError, Scenario, SimulationConfig};
pub use damage::calculate_damage;
pub use error::SimError;
pub use modifier::ModifierManager;
pub use rage::RageResource;
pub use selection::BuildSelection;
pub use source::StatSource;
pub use stat_block::{resolve_stats, StatAccumulator, StatBlock, StatResolver};
pub use types::{EffectTarget, Stat, StatMap};
