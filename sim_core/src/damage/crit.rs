//! Critical strike resolution

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How crits are resolved for a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CritMode {
    /// Multiply every hit by the long-run average crit multiplier
    Expected,
    /// Roll once per hit
    Rolled,
}

impl CritMode {
    pub fn from_deterministic(deterministic: bool) -> Self {
        if deterministic {
            CritMode::Expected
        } else {
            CritMode::Rolled
        }
    }
}

/// Average multiplier of a hit: `(1 - c) + c * cd`
///
/// `crit_chance` is clamped to `[0, 1]` and `crit_damage` floored at 1.0.
pub fn expected_crit_multiplier(crit_chance: f64, crit_damage: f64) -> f64 {
    let c = crit_chance.clamp(0.0, 1.0);
    let cd = crit_damage.max(1.0);
    (1.0 - c) + c * cd
}

/// Draw one uniform value and compare it against the clamped crit chance
pub fn roll_is_crit(crit_chance: f64, rng: &mut impl Rng) -> bool {
    let c = crit_chance.clamp(0.0, 1.0);
    rng.gen::<f64>() < c
}
