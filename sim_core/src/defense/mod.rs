//! Defense system - Damage reduction and defense mitigation

mod mitigation;

pub use mitigation::{apply_damage_reduction, apply_defense_mitigation, defense_mitigation};

/// Defense calculation constants
pub mod constants {
    /// Damage reduction can never remove more than this fraction of a hit
    pub const MAX_DAMAGE_REDUCTION: f64 = 0.95;

    /// Floor for the defense constant so mitigation never divides by zero
    pub const MIN_DEFENSE_CONSTANT: f64 = 1e-6;
}
