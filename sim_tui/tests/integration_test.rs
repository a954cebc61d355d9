//! Integration test: Load catalog -> Resolve builds -> Simulate -> Report
//!
//! Walks the same path as the `run` command, against the bundled demo data.

use sim_core::prelude::*;
use sim_core::MonteCarloSummary;
use std::path::PathBuf;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data")
}

fn print_stats(label: &str, stats: &StatBlock) {
    println!("  {label}:");
    for (stat, value) in stats.iter() {
        println!("    {:20} {:.3}", stat.name(), value);
    }
}

#[test]
fn test_full_flow() {
    separator("STEP 1: Load catalog and scenario");
    let catalog = Catalog::load_dir(&data_dir()).expect("demo catalog should load");
    let scenario =
        load_scenario(&data_dir().join("demo_scenario.toml")).expect("demo scenario should load");
    println!("  Heroes: {:?}", catalog.hero_ids());

    separator("STEP 2: Resolve builds");
    let resolver = StatResolver::new(&catalog);
    let attacker = resolver.resolve(&scenario.attacker).expect("attacker resolves");
    let defender = resolver.resolve(&scenario.defender).expect("defender resolves");
    print_stats("Attacker", &attacker);
    print_stats("Defender", &defender);
    assert!(attacker.attack() > 0.0);
    assert!(defender.shield() > 0.0);

    separator("STEP 3: Deterministic run");
    let mut sim = CombatSimulator::from_catalog(
        &catalog,
        &scenario.attacker,
        &scenario.defender,
        scenario.simulation.clone(),
    )
    .expect("simulation builds");
    let result = sim.run();
    println!("  {:#?}", result);
    assert!(result.total_damage > 0.0);
    assert!(
        (result.breakdown.sum() - result.total_damage).abs() < 1e-6,
        "single target: every dealt point lands in exactly one bucket"
    );

    separator("STEP 4: JSON report");
    let json = serde_json::to_string_pretty(&result).expect("result serializes");
    println!("{json}");
    let parsed: SimulationResult = serde_json::from_str(&json).expect("result parses back");
    assert_eq!(parsed.casts, result.casts);

    separator("STEP 5: Monte Carlo batch");
    let template = CombatSimulator::from_catalog(
        &catalog,
        &scenario.attacker,
        &scenario.defender,
        scenario.simulation,
    )
    .expect("simulation builds");
    let summary: MonteCarloSummary = run_monte_carlo(|| template.clone(), 200, 42);
    println!("  {:#?}", summary);
    assert_eq!(summary.iterations, 200);
    assert!(summary.min_damage <= summary.mean_damage);
    assert!(summary.mean_damage <= summary.max_damage);
}

#[test]
fn test_unknown_hero_in_scenario() {
    let catalog = Catalog::load_dir(&data_dir()).expect("demo catalog should load");
    let result = CombatSimulator::from_catalog(
        &catalog,
        &BuildSelection::new("no_such_hero"),
        &BuildSelection::new("defender_demo"),
        SimulationConfig::default(),
    );
    assert!(matches!(result, Err(SimError::UnknownHero(id)) if id == "no_such_hero"));
}
