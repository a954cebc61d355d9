//! Monte Carlo batch over rolled crits

use super::SimArgs;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use sim_core::{run_monte_carlo, CombatSimulator, MonteCarloSummary};
use tracing::info;

/// Run many stochastic simulations and print summary statistics as JSON
#[derive(Parser, Debug)]
pub struct Batch {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Number of simulations to run
    #[arg(long, default_value_t = 1000)]
    pub iterations: u32,
}

#[derive(Serialize)]
struct BatchReport {
    seed: u64,
    #[serde(flatten)]
    summary: MonteCarloSummary,
}

impl Batch {
    pub fn execute(self) -> Result<()> {
        let (catalog, scenario) = self.sim.load()?;
        let seed = scenario.simulation.seed.unwrap_or_else(rand::random);
        let template = CombatSimulator::from_catalog(
            &catalog,
            &scenario.attacker,
            &scenario.defender,
            scenario.simulation,
        )?;

        info!(iterations = self.iterations, seed, "starting batch");
        let summary = run_monte_carlo(|| template.clone(), self.iterations, seed);

        println!(
            "{}",
            serde_json::to_string_pretty(&BatchReport { seed, summary })?
        );
        Ok(())
    }
}
