//! Application state

use sim_core::{
    BuildSelection, Catalog, CombatSimulator, HeroDefinition, Scenario, SimError,
    SimulationConfig, SimulationResult, StatBlock, StatResolver, TickRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Summary,
    Timeline,
    Stats,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Summary, Tab::Timeline, Tab::Stats]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Timeline => "Timeline",
            Tab::Stats => "Stats",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    catalog: Catalog,
    pub attacker: BuildSelection,
    pub defender: BuildSelection,
    pub config: SimulationConfig,

    // Outputs of the latest run
    pub result: SimulationResult,
    pub timeline: Vec<TickRecord>,
    pub attacker_stats: StatBlock,
    pub defender_stats: StatBlock,

    pub timeline_scroll: usize,
    pub status: String,
}

impl App {
    /// Resolve both builds and run once
    pub fn new(catalog: Catalog, scenario: Scenario) -> Result<Self, SimError> {
        let (result, timeline, attacker_stats, defender_stats) =
            simulate(&catalog, &scenario.attacker, &scenario.defender, &scenario.simulation)?;

        Ok(App {
            current_tab: Tab::Summary,
            catalog,
            attacker: scenario.attacker,
            defender: scenario.defender,
            config: scenario.simulation,
            result,
            timeline,
            attacker_stats,
            defender_stats,
            timeline_scroll: 0,
            status: String::from("Ready"),
        })
    }

    pub fn attacker_hero(&self) -> Option<&HeroDefinition> {
        self.catalog.hero(&self.attacker.hero_id)
    }

    pub fn defender_hero(&self) -> Option<&HeroDefinition> {
        self.catalog.hero(&self.defender.hero_id)
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn on_up(&mut self) {
        if self.current_tab == Tab::Timeline {
            self.timeline_scroll = self.timeline_scroll.saturating_sub(1);
        }
    }

    pub fn on_down(&mut self) {
        if self.current_tab == Tab::Timeline
            && self.timeline_scroll + 1 < self.timeline.len()
        {
            self.timeline_scroll += 1;
        }
    }

    pub fn toggle_deterministic(&mut self) {
        self.config.deterministic = !self.config.deterministic;
        let mode = if self.config.deterministic {
            "expected crits"
        } else {
            "rolled crits"
        };
        self.rerun(format!("Switched to {mode}"));
    }

    pub fn toggle_counter(&mut self) {
        self.config.counter_enabled = !self.config.counter_enabled;
        let state = if self.config.counter_enabled { "on" } else { "off" };
        self.rerun(format!("Counter rage {state}"));
    }

    pub fn add_target(&mut self) {
        self.config.target_count = self.config.target_count.saturating_add(1);
        self.rerun(format!("Targets: {}", self.config.target_count));
    }

    pub fn remove_target(&mut self) {
        if self.config.target_count <= 1 {
            self.status = String::from("Already at one target");
            return;
        }
        self.config.target_count -= 1;
        self.rerun(format!("Targets: {}", self.config.target_count));
    }

    /// Pick a fresh seed for rolled crits
    pub fn reseed(&mut self) {
        let seed: u64 = rand::random();
        self.config.seed = Some(seed);
        self.rerun(format!("Seed: {seed}"));
    }

    fn rerun(&mut self, message: String) {
        match simulate(&self.catalog, &self.attacker, &self.defender, &self.config) {
            Ok((result, timeline, attacker_stats, defender_stats)) => {
                self.result = result;
                self.timeline = timeline;
                self.attacker_stats = attacker_stats;
                self.defender_stats = defender_stats;
                self.timeline_scroll = self
                    .timeline_scroll
                    .min(self.timeline.len().saturating_sub(1));
                self.status = message;
            }
            Err(e) => self.status = format!("Error: {e}"),
        }
    }
}

type RunOutput = (SimulationResult, Vec<TickRecord>, StatBlock, StatBlock);

fn simulate(
    catalog: &Catalog,
    attacker: &BuildSelection,
    defender: &BuildSelection,
    config: &SimulationConfig,
) -> Result<RunOutput, SimError> {
    let resolver = StatResolver::new(catalog);
    let attacker_stats = resolver.resolve(attacker)?;
    let defender_stats = resolver.resolve(defender)?;

    let mut sim = CombatSimulator::from_catalog(catalog, attacker, defender, config.clone())?;
    let (result, timeline) = sim.run_with_timeline();
    Ok((result, timeline, attacker_stats, defender_stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::Stat;

    fn app() -> App {
        let mut catalog = Catalog::new();
        catalog.insert_hero(
            HeroDefinition::new("a")
                .with_stat(Stat::Attack, 1000.0)
                .with_stat(Stat::CritChance, 0.3)
                .with_skill_factor(1500.0),
        );
        catalog.insert_hero(HeroDefinition::new("d").with_stat(Stat::Defense, 1400.0));
        let scenario = Scenario {
            simulation: SimulationConfig {
                duration_s: 30,
                ..Default::default()
            },
            attacker: BuildSelection::new("a"),
            defender: BuildSelection::new("d"),
        };
        App::new(catalog, scenario).unwrap()
    }

    #[test]
    fn test_initial_run() {
        let app = app();
        assert_eq!(app.timeline.len(), 30);
        assert!(app.result.total_damage > 0.0);
        assert!((app.attacker_stats.attack() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tab_cycling() {
        let mut app = app();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Timeline);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Stats);
        app.set_tab(7);
        assert_eq!(app.current_tab, Tab::Stats);
        app.set_tab(0);
        assert_eq!(app.current_tab, Tab::Summary);
    }

    #[test]
    fn test_targets_never_drop_below_one() {
        let mut app = app();
        app.remove_target();
        assert_eq!(app.config.target_count, 1);

        app.add_target();
        assert_eq!(app.config.target_count, 2);
        assert!(app.result.breakdown.aoe_extra > 0.0);
    }

    #[test]
    fn test_toggles_rerun() {
        let mut app = app();
        let casts_with_counter = app.result.casts;

        app.toggle_counter();
        assert!(!app.config.counter_enabled);
        assert!(app.result.casts < casts_with_counter);

        app.toggle_deterministic();
        assert!(!app.config.deterministic);
        app.reseed();
        assert!(app.config.seed.is_some());
    }

    #[test]
    fn test_timeline_scroll_bounds() {
        let mut app = app();
        app.set_tab(1);
        app.on_up();
        assert_eq!(app.timeline_scroll, 0);
        for _ in 0..100 {
            app.on_down();
        }
        assert_eq!(app.timeline_scroll, 29);
    }
}
