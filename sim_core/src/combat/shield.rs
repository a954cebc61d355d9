//! Shield - the defender's persistent absorption pool

use serde::{Deserialize, Serialize};

/// Damage absorption pool that lasts the whole run
///
/// Absorbed damage is gone for good; the pool never regenerates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    remaining: f64,
    absorbed: f64,
}

impl Shield {
    /// Create a shield; a negative capacity is treated as empty
    pub fn new(capacity: f64) -> Self {
        Shield {
            remaining: capacity.max(0.0),
            absorbed: 0.0,
        }
    }

    /// Run one hit through the shield
    ///
    /// Returns `(dealt, absorbed)`. Negative hits count as zero.
    pub fn absorb(&mut self, damage: f64) -> (f64, f64) {
        let damage = damage.max(0.0);
        if self.remaining <= 0.0 {
            return (damage, 0.0);
        }
        let absorbed = self.remaining.min(damage);
        self.remaining = (self.remaining - absorbed).max(0.0);
        self.absorbed += absorbed;
        (damage - absorbed, absorbed)
    }

    /// Capacity left
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Total absorbed so far
    pub fn absorbed(&self) -> f64 {
        self.absorbed
    }

    pub fn is_broken(&self) -> bool {
        self.remaining <= 0.0
    }
}
