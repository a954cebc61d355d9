//! Scenario files - both builds plus run parameters in one TOML document

use super::{ConfigError, SimulationConfig};
use crate::selection::BuildSelection;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One attacker-vs-defender request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub simulation: SimulationConfig,
    pub attacker: BuildSelection,
    pub defender: BuildSelection,
}

/// Load and validate a scenario file
pub fn load_scenario(path: &Path) -> Result<Scenario, ConfigError> {
    let scenario: Scenario = super::load_toml(path)?;
    scenario.simulation.validate()?;
    Ok(scenario)
}

/// Parse and validate a scenario from a TOML string
pub fn parse_scenario(content: &str) -> Result<Scenario, ConfigError> {
    let scenario: Scenario = super::parse_toml(content)?;
    scenario.simulation.validate()?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario() {
        let toml = r#"
[simulation]
duration_s = 45
deterministic = false
seed = 7

[attacker]
hero_id = "attacker_demo"
artifact_id = "art_demo"

[attacker.selected_talents]
t1 = 3
t2 = 2

[defender]
hero_id = "defender_demo"
"#;

        let scenario = parse_scenario(toml).unwrap();
        assert_eq!(scenario.simulation.duration_s, 45);
        assert!(!scenario.simulation.deterministic);
        assert_eq!(scenario.simulation.seed, Some(7));
        assert_eq!(scenario.attacker.selected_talents.len(), 2);
        assert_eq!(scenario.defender.hero_id, "defender_demo");
    }

    #[test]
    fn test_missing_simulation_table_uses_defaults() {
        let toml = r#"
[attacker]
hero_id = "a"

[defender]
hero_id = "b"
"#;
        let scenario = parse_scenario(toml).unwrap();
        assert_eq!(scenario.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_invalid_scenario_is_rejected() {
        let toml = r#"
[simulation]
target_count = 0

[attacker]
hero_id = "a"

[defender]
hero_id = "b"
"#;
        assert!(matches!(
            parse_scenario(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
