//! Run parameters for a single simulation

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable parameters of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Fight length in whole seconds (one tick per second)
    #[serde(default = "default_duration_s")]
    pub duration_s: u32,
    /// Use expected crit damage instead of rolling
    #[serde(default = "default_true")]
    pub deterministic: bool,
    #[serde(default = "default_target_count")]
    pub target_count: u32,
    /// Fraction of the primary skill hit dealt to each extra target
    #[serde(default = "default_aoe_split_ratio")]
    pub aoe_split_ratio: f64,
    #[serde(default = "default_true")]
    pub counter_enabled: bool,
    #[serde(default = "default_rage_on_normal")]
    pub rage_on_normal: f64,
    #[serde(default = "default_rage_on_counter")]
    pub rage_on_counter: f64,
    /// Formula constant: mitigation = defense / (defense + constant)
    #[serde(default = "default_defense_constant")]
    pub defense_constant: f64,
    /// RNG seed for stochastic runs (fresh entropy when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            duration_s: default_duration_s(),
            deterministic: true,
            target_count: default_target_count(),
            aoe_split_ratio: default_aoe_split_ratio(),
            counter_enabled: true,
            rage_on_normal: default_rage_on_normal(),
            rage_on_counter: default_rage_on_counter(),
            defense_constant: default_defense_constant(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reject parameter combinations the engine cannot interpret
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_count == 0 {
            return Err(ConfigError::ValidationError(
                "target_count must be at least 1".to_string(),
            ));
        }
        if !self.aoe_split_ratio.is_finite() || self.aoe_split_ratio < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "aoe_split_ratio must be a non-negative number, got {}",
                self.aoe_split_ratio
            )));
        }
        if !self.defense_constant.is_finite() || self.defense_constant <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "defense_constant must be positive, got {}",
                self.defense_constant
            )));
        }
        if !self.rage_on_normal.is_finite() || !self.rage_on_counter.is_finite() {
            return Err(ConfigError::ValidationError(
                "rage gains must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn default_duration_s() -> u32 {
    60
}
fn default_true() -> bool {
    true
}
fn default_target_count() -> u32 {
    1
}
fn default_aoe_split_ratio() -> f64 {
    0.5
}
fn default_rage_on_normal() -> f64 {
    94.0
}
fn default_rage_on_counter() -> f64 {
    16.0
}
fn default_defense_constant() -> f64 {
    1400.0
}
