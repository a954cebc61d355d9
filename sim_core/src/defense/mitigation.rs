//! Mitigation - Defender-side multipliers applied to every hit

use super::constants::{MAX_DAMAGE_REDUCTION, MIN_DEFENSE_CONSTANT};

/// Fraction of damage removed by defense
///
/// Uses a diminishing returns curve:
/// `Mitigation = Defense / (Defense + CONSTANT)`
///
/// Defense is floored at 0 and the constant at a tiny epsilon, so the
/// result always lies in `[0, 1)`. At `defense == constant` it is exactly 0.5.
pub fn defense_mitigation(defense: f64, constant: f64) -> f64 {
    let defense = defense.max(0.0);
    let constant = constant.max(MIN_DEFENSE_CONSTANT);
    defense / (defense + constant)
}

/// Damage after defense mitigation
pub fn apply_defense_mitigation(damage: f64, defense: f64, constant: f64) -> f64 {
    damage * (1.0 - defense_mitigation(defense, constant))
}

/// Damage after flat damage reduction, clamped to `[0, 0.95]`
pub fn apply_damage_reduction(damage: f64, damage_reduction: f64) -> f64 {
    damage * (1.0 - damage_reduction.clamp(0.0, MAX_DAMAGE_REDUCTION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_defense() {
        assert_eq!(defense_mitigation(0.0, 1400.0), 0.0);
        assert!((apply_defense_mitigation(100.0, 0.0, 1400.0) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_defense_equal_to_constant_halves() {
        assert!((defense_mitigation(1400.0, 1400.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_inputs_are_floored() {
        assert_eq!(defense_mitigation(-500.0, 1400.0), 0.0);
        // Constant floored to epsilon: any positive defense is almost total mitigation
        let m = defense_mitigation(100.0, 0.0);
        assert!(m < 1.0 && m > 0.999_999);
        // Both zero: 0 / epsilon
        assert_eq!(defense_mitigation(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_damage_reduction_cap() {
        assert!((apply_damage_reduction(100.0, 0.5) - 50.0).abs() < f64::EPSILON);
        assert!((apply_damage_reduction(100.0, 2.0) - 5.0).abs() < 1e-9);
        assert!((apply_damage_reduction(100.0, -1.0) - 100.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn mitigation_in_unit_range(defense in 0.0f64..1e9, constant in 1e-3f64..1e6) {
            let m = defense_mitigation(defense, constant);
            prop_assert!((0.0..1.0).contains(&m));
        }

        #[test]
        fn mitigation_strictly_increasing(
            defense in 0.0f64..1e6,
            delta in 1.0f64..1e4,
            constant in 1.0f64..1e5,
        ) {
            prop_assert!(defense_mitigation(defense + delta, constant) > defense_mitigation(defense, constant));
        }
    }

    #[test]
    fn test_mitigation_approaches_one() {
        assert!(defense_mitigation(1e12, 1400.0) > 0.999_999);
    }
}
