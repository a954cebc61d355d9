//! Monte Carlo batches - many rolled-crit runs of the same build pairing

use super::simulator::CombatSimulator;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Aggregate over a batch of stochastic runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloSummary {
    pub iterations: u32,
    pub mean_damage: f64,
    pub min_damage: f64,
    pub max_damage: f64,
    /// Population standard deviation of total damage
    pub std_dev: f64,
    pub mean_dps: f64,
}

/// Run `iterations` independent simulations in stochastic mode
///
/// Every simulator produced by `sim_factory` is switched to rolled crits
/// with its own RNG stream drawn from a batch RNG seeded with `seed`, so a
/// batch replays exactly for the same seed.
pub fn run_monte_carlo<F>(mut sim_factory: F, iterations: u32, seed: u64) -> MonteCarloSummary
where
    F: FnMut() -> CombatSimulator,
{
    if iterations == 0 {
        return MonteCarloSummary::default();
    }

    let mut batch_rng = ChaCha8Rng::seed_from_u64(seed);
    let mut totals = Vec::with_capacity(iterations as usize);
    let mut dps_sum = 0.0;

    for _ in 0..iterations {
        let mut sim = sim_factory().into_stochastic(batch_rng.gen());
        let result = sim.run();
        totals.push(result.total_damage);
        dps_sum += result.dps;
    }

    let n = f64::from(iterations);
    let mean = totals.iter().sum::<f64>() / n;
    let variance = totals.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;
    let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let summary = MonteCarloSummary {
        iterations,
        mean_damage: mean,
        min_damage: min,
        max_damage: max,
        std_dev: variance.sqrt(),
        mean_dps: dps_sum / n,
    };
    info!(
        iterations,
        mean = summary.mean_damage,
        std_dev = summary.std_dev,
        "monte carlo batch complete"
    );
    summary
}
