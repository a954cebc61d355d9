//! RageResource - the gated counter that unlocks skill casts

use serde::{Deserialize, Serialize};

/// Per-attacker rage pool
///
/// Every gain is scaled by `1 + rage_bonus`, where the bonus is captured
/// once from the attacker's resolved stats. Casting subtracts the cost and
/// keeps any excess; there is no cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RageResource {
    rage: f64,
    cost: f64,
    bonus: f64,
}

impl RageResource {
    pub fn new(cost: u32, rage_bonus: f64) -> Self {
        RageResource {
            rage: 0.0,
            cost: f64::from(cost),
            bonus: rage_bonus,
        }
    }

    /// Add `amount * (1 + rage_bonus)`
    pub fn gain(&mut self, amount: f64) {
        self.rage += amount * (1.0 + self.bonus);
    }

    pub fn can_cast(&self) -> bool {
        self.rage >= self.cost
    }

    /// Spend one cast's worth of rage
    pub fn cast(&mut self) {
        self.rage -= self.cost;
    }

    pub fn rage(&self) -> f64 {
        self.rage
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn bonus(&self) -> f64 {
        self.bonus
    }
}
