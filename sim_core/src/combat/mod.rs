//! Combat - the tick-driven loop that runs one attacker against one defender

mod monte_carlo;
mod result;
mod shield;
mod simulator;

pub use monte_carlo::{run_monte_carlo, MonteCarloSummary};
pub use result::{DamageBreakdown, SimulationResult, TickRecord};
pub use shield::Shield;
pub use simulator::CombatSimulator;
