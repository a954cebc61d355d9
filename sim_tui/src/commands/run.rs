//! Headless single run

use super::SimArgs;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use sim_core::{CombatSimulator, SimulationResult, TickRecord};

/// Run one simulation and print the result as JSON
#[derive(Parser, Debug)]
pub struct Run {
    #[command(flatten)]
    pub sim: SimArgs,

    /// Include one record per second of combat
    #[arg(long)]
    pub timeline: bool,
}

#[derive(Serialize)]
struct RunReport {
    #[serde(flatten)]
    result: SimulationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeline: Option<Vec<TickRecord>>,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let (catalog, scenario) = self.sim.load()?;
        let mut sim = CombatSimulator::from_catalog(
            &catalog,
            &scenario.attacker,
            &scenario.defender,
            scenario.simulation,
        )?;

        let report = if self.timeline {
            let (result, timeline) = sim.run_with_timeline();
            RunReport {
                result,
                timeline: Some(timeline),
            }
        } else {
            RunReport {
                result: sim.run(),
                timeline: None,
            }
        };

        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
