//! Subcommands and the flags they share

mod batch;
mod run;
mod view;

pub use batch::Batch;
pub use run::Run;
pub use view::View;

use anyhow::{Context, Result};
use clap::Args;
use sim_core::config::load_scenario;
use sim_core::{BuildSelection, Catalog, Scenario, SimulationConfig};
use std::path::PathBuf;

/// Where the inputs come from and which run parameters to override
#[derive(Args, Debug, Clone)]
pub struct SimArgs {
    /// Directory holding heroes.json, artifacts.json, pets.json and talents.json
    #[arg(long, default_value = "data")]
    pub catalog: PathBuf,

    /// Scenario TOML; the demo pairing is used when omitted
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Roll crits instead of using their expected value
    #[arg(long)]
    pub stochastic: bool,

    /// Seed for rolled crits
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of targets hit by each skill cast
    #[arg(long)]
    pub targets: Option<u32>,

    /// Fight length in seconds
    #[arg(long)]
    pub duration: Option<u32>,

    /// Disable counter-attack rage
    #[arg(long)]
    pub no_counter: bool,

    /// Rage per normal attack
    #[arg(long)]
    pub rage_normal: Option<f64>,

    /// Rage per counter attack
    #[arg(long)]
    pub rage_counter: Option<f64>,

    /// Defense constant in the mitigation formula
    #[arg(long)]
    pub def_const: Option<f64>,

    /// Fraction of the primary hit dealt to each extra target
    #[arg(long)]
    pub aoe_ratio: Option<f64>,
}

impl SimArgs {
    /// Load the catalog and scenario, then apply flag overrides
    pub fn load(&self) -> Result<(Catalog, Scenario)> {
        let catalog = Catalog::load_dir(&self.catalog)
            .with_context(|| format!("Failed to load catalog from {}", self.catalog.display()))?;

        let mut scenario = match &self.scenario {
            Some(path) => load_scenario(path)
                .with_context(|| format!("Failed to load scenario {}", path.display()))?,
            None => demo_scenario(),
        };

        self.apply_overrides(&mut scenario.simulation);
        scenario.simulation.validate()?;
        Ok((catalog, scenario))
    }

    fn apply_overrides(&self, config: &mut SimulationConfig) {
        if self.stochastic {
            config.deterministic = false;
        }
        if self.no_counter {
            config.counter_enabled = false;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(targets) = self.targets {
            config.target_count = targets;
        }
        if let Some(duration) = self.duration {
            config.duration_s = duration;
        }
        if let Some(rage) = self.rage_normal {
            config.rage_on_normal = rage;
        }
        if let Some(rage) = self.rage_counter {
            config.rage_on_counter = rage;
        }
        if let Some(constant) = self.def_const {
            config.defense_constant = constant;
        }
        if let Some(ratio) = self.aoe_ratio {
            config.aoe_split_ratio = ratio;
        }
    }
}

/// The bundled demo pairing
pub fn demo_scenario() -> Scenario {
    Scenario {
        simulation: SimulationConfig::default(),
        attacker: BuildSelection::new("attacker_demo")
            .with_artifact("art_demo")
            .with_pet("pet_demo")
            .with_talent("t1", 3)
            .with_talent("t2", 2),
        defender: BuildSelection::new("defender_demo"),
    }
}
