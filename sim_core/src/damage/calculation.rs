//! Damage calculation - turning attacker + defender stats into one hit

use super::crit::{expected_crit_multiplier, roll_is_crit, CritMode};
use crate::config::SimulationConfig;
use crate::defense::{apply_damage_reduction, apply_defense_mitigation};
use crate::stat_block::StatBlock;
use rand::Rng;

/// Fraction of attack used by a normal attack
pub const NORMAL_ATTACK_MULTIPLIER: f64 = 0.5;

/// Run-wide inputs to the damage formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOptions {
    pub defense_constant: f64,
    pub crit_mode: CritMode,
}

impl From<&SimulationConfig> for DamageOptions {
    fn from(config: &SimulationConfig) -> Self {
        DamageOptions {
            defense_constant: config.defense_constant,
            crit_mode: CritMode::from_deterministic(config.deterministic),
        }
    }
}

/// Calculate one hit from effective attacker and defender stats
///
/// Steps, in order:
/// 1. `attack * base_multiplier`
/// 2. `* (1 + skill_damage_bonus) * (1 + all_damage_bonus)`
/// 3. defender damage reduction (capped at 95%)
/// 4. defense mitigation
/// 5. crit, expected or rolled depending on `options.crit_mode`
///
/// The RNG is only touched in `CritMode::Rolled`. The result is never negative.
pub fn calculate_damage(
    attacker: &StatBlock,
    defender: &StatBlock,
    base_multiplier: f64,
    options: DamageOptions,
    rng: &mut impl Rng,
) -> f64 {
    let base = attacker.attack() * base_multiplier;
    let mut damage =
        base * (1.0 + attacker.skill_damage_bonus()) * (1.0 + attacker.all_damage_bonus());

    damage = apply_damage_reduction(damage, defender.effective_damage_reduction());
    damage = apply_defense_mitigation(damage, defender.defense(), options.defense_constant);

    match options.crit_mode {
        CritMode::Expected => {
            damage *= expected_crit_multiplier(
                attacker.effective_crit_chance(),
                attacker.effective_crit_damage(),
            );
        }
        CritMode::Rolled => {
            if roll_is_crit(attacker.effective_crit_chance(), rng) {
                damage *= attacker.effective_crit_damage();
            }
        }
    }

    damage.max(0.0)
}
