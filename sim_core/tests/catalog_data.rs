//! Loading the bundled demo catalog and scenario

use sim_core::config::load_scenario;
use sim_core::prelude::*;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data")
}

#[test]
fn test_load_demo_catalog() {
    let catalog = Catalog::load_dir(&data_dir()).unwrap();
    assert_eq!(catalog.hero_ids(), vec!["attacker_demo", "defender_demo"]);
    assert!(catalog.artifact(Some("art_demo")).is_some());
    assert!(catalog.pet(Some("pet_demo")).is_some());
    assert_eq!(catalog.talents.len(), 3);
}

#[test]
fn test_demo_attacker_resolution() {
    let catalog = Catalog::load_dir(&data_dir()).unwrap();
    let scenario = load_scenario(&data_dir().join("demo_scenario.toml")).unwrap();

    let stats = StatResolver::new(&catalog).resolve(&scenario.attacker).unwrap();

    // 1200 base + 50 pet + 150 artifact + 3 * 20 talent
    assert!((stats.attack() - 1460.0).abs() < 1e-9);
    assert!((stats.get(Stat::CritChance) - 0.15).abs() < 1e-9);
    assert!((stats.get(Stat::CritDamage) - 1.6).abs() < 1e-9);
    assert!((stats.rage_bonus() - 0.05).abs() < 1e-9);
}

#[test]
fn test_demo_scenario_runs() {
    let catalog = Catalog::load_dir(&data_dir()).unwrap();
    let scenario = load_scenario(&data_dir().join("demo_scenario.toml")).unwrap();

    let mut sim = CombatSimulator::from_catalog(
        &catalog,
        &scenario.attacker,
        &scenario.defender,
        scenario.simulation.clone(),
    )
    .unwrap();
    let (result, timeline) = sim.run_with_timeline();

    assert_eq!(result.duration_s, 60);
    assert_eq!(timeline.len(), 60);
    assert!(result.casts > 0);
    assert!((result.shield_absorbed - 2000.0).abs() < 1e-9);
    assert!(result.total_damage > 0.0);
    assert_eq!(result.breakdown.aoe_extra, 0.0);

    let again = CombatSimulator::from_catalog(
        &catalog,
        &scenario.attacker,
        &scenario.defender,
        scenario.simulation,
    )
    .unwrap()
    .run();
    assert_eq!(result, again);
}

#[test]
fn test_missing_catalog_dir_is_io_error() {
    let result = Catalog::load_dir(&data_dir().join("does_not_exist"));
    assert!(matches!(result, Err(sim_core::CatalogError::Io(_))));
}
