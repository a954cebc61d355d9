//! Damage system - single-hit damage from attacker and defender stats

mod calculation;
mod crit;

pub use calculation::{calculate_damage, DamageOptions, NORMAL_ATTACK_MULTIPLIER};
pub use crit::{expected_crit_multiplier, roll_is_crit, CritMode};
