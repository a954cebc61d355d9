//! SimulationResult - what a run reports

use serde::{Deserialize, Serialize};

/// Damage split by where it came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub normal: f64,
    pub skill: f64,
    pub aoe_extra: f64,
}

impl DamageBreakdown {
    pub fn sum(&self) -> f64 {
        self.normal + self.skill + self.aoe_extra
    }
}

/// Summary of one completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub duration_s: u32,
    /// Post-shield damage dealt
    pub total_damage: f64,
    /// `total_damage / max(1, duration_s)`
    pub dps: f64,
    pub breakdown: DamageBreakdown,
    pub final_rage: f64,
    /// Number of skill casts
    #[serde(default)]
    pub casts: u32,
    /// Damage soaked by the defender's shield
    #[serde(default)]
    pub shield_absorbed: f64,
}

/// What happened during one second of combat
///
/// `skill_dealt` and `aoe_extra_dealt` are the amounts credited to those
/// breakdown buckets, which for multi-target casts is not the same as the
/// post-shield damage of the hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Second at which the tick started
    pub time_s: u32,
    pub normal_dealt: f64,
    pub skill_dealt: f64,
    pub aoe_extra_dealt: f64,
    pub cast: bool,
    pub rage_after: f64,
    pub shield_after: f64,
}

impl TickRecord {
    /// Damage credited to any bucket this tick
    pub fn total(&self) -> f64 {
        self.normal_dealt + self.skill_dealt + self.aoe_extra_dealt
    }
}
