//! CombatSimulator - one attacker against one defender, one second per tick

use super::result::{DamageBreakdown, SimulationResult, TickRecord};
use super::shield::Shield;
use crate::catalog::{Catalog, HeroDefinition, SkillEffect};
use crate::config::SimulationConfig;
use crate::damage::{calculate_damage, CritMode, DamageOptions, NORMAL_ATTACK_MULTIPLIER};
use crate::error::SimError;
use crate::modifier::ModifierManager;
use crate::rage::RageResource;
use crate::selection::BuildSelection;
use crate::stat_block::{StatBlock, StatResolver};
use crate::types::{EffectTarget, Stat};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// A single combat run
///
/// Owns every piece of mutable fight state: both modifier ledgers, the
/// attacker's rage, the defender's shield and the running totals. The two
/// resolved stat blocks are never changed; effective stats are rebuilt from
/// them on every hit.
#[derive(Debug, Clone)]
pub struct CombatSimulator {
    hero_id: String,
    attacker_base: StatBlock,
    defender_base: StatBlock,
    skill_multiplier: f64,
    skill_effects: Vec<SkillEffect>,
    config: SimulationConfig,
    options: DamageOptions,

    rage: RageResource,
    shield: Shield,
    attacker_mods: ModifierManager,
    defender_mods: ModifierManager,

    time_s: u32,
    total_damage: f64,
    breakdown: DamageBreakdown,
    casts: u32,
    rng: ChaCha8Rng,
}

impl CombatSimulator {
    /// Build a run from already resolved stats
    ///
    /// The attacker hero supplies the rage cost, skill factor and skill
    /// effects. The defender's shield stat seeds the persistent shield.
    pub fn new(
        attacker_hero: &HeroDefinition,
        attacker: StatBlock,
        defender: StatBlock,
        config: SimulationConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        CombatSimulator {
            hero_id: attacker_hero.id.clone(),
            attacker_base: attacker,
            defender_base: defender.with_value(Stat::Shield, 0.0),
            skill_multiplier: attacker_hero.skill_multiplier(),
            skill_effects: attacker_hero.skill_effects.clone(),
            options: DamageOptions::from(&config),
            config,
            rage: RageResource::new(attacker_hero.rage_cost, attacker.rage_bonus()),
            shield: Shield::new(defender.shield()),
            attacker_mods: ModifierManager::new(),
            defender_mods: ModifierManager::new(),
            time_s: 0,
            total_damage: 0.0,
            breakdown: DamageBreakdown::default(),
            casts: 0,
            rng,
        }
    }

    /// Validate the config, resolve both builds and set up a run
    ///
    /// Fails when either hero is missing from the catalog. Unknown artifact,
    /// pet and talent ids contribute nothing.
    pub fn from_catalog(
        catalog: &Catalog,
        attacker: &BuildSelection,
        defender: &BuildSelection,
        config: SimulationConfig,
    ) -> Result<Self, SimError> {
        config.validate()?;

        let hero = catalog.require_hero(&attacker.hero_id)?;
        let resolver = StatResolver::new(catalog);
        let attacker_stats = resolver.resolve(attacker)?;
        let defender_stats = resolver.resolve(defender)?;

        debug!(
            attacker = %attacker.hero_id,
            defender = %defender.hero_id,
            duration_s = config.duration_s,
            deterministic = config.deterministic,
            "simulation prepared"
        );

        Ok(Self::new(hero, attacker_stats, defender_stats, config))
    }

    /// Switch to rolled crits driven by a fresh RNG stream
    ///
    /// Meant for a simulator that has not been stepped yet.
    pub fn into_stochastic(mut self, seed: u64) -> Self {
        self.config.deterministic = false;
        self.config.seed = Some(seed);
        self.options.crit_mode = CritMode::Rolled;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Advance one second
    ///
    /// Order: normal attack, counter rage, skill cast if affordable,
    /// modifier decay on both sides, then the clock. Stepping past the
    /// configured duration is allowed; `run` simply stops there.
    pub fn step(&mut self) -> TickRecord {
        let mut record = TickRecord {
            time_s: self.time_s,
            ..Default::default()
        };

        let normal = self.hit(NORMAL_ATTACK_MULTIPLIER);
        let dealt = self.apply_to_defender(normal);
        self.breakdown.normal += dealt;
        record.normal_dealt = dealt;
        self.rage.gain(self.config.rage_on_normal);

        if self.config.counter_enabled {
            self.rage.gain(self.config.rage_on_counter);
        }

        if self.rage.can_cast() {
            let (skill, aoe_extra) = self.cast_skill();
            record.cast = true;
            record.skill_dealt = skill;
            record.aoe_extra_dealt = aoe_extra;
        }

        self.attacker_mods.tick();
        self.defender_mods.tick();
        self.time_s += 1;

        record.rage_after = self.rage.rage();
        record.shield_after = self.shield.remaining();
        trace!(
            time_s = record.time_s,
            normal = record.normal_dealt,
            cast = record.cast,
            rage = record.rage_after,
            "tick"
        );
        record
    }

    /// Run to the configured duration and summarise
    pub fn run(&mut self) -> SimulationResult {
        while self.time_s < self.config.duration_s {
            self.step();
        }
        self.finish()
    }

    /// Like `run`, also returning every tick that was executed
    pub fn run_with_timeline(&mut self) -> (SimulationResult, Vec<TickRecord>) {
        let remaining = self.config.duration_s.saturating_sub(self.time_s);
        let mut timeline = Vec::with_capacity(remaining as usize);
        while self.time_s < self.config.duration_s {
            timeline.push(self.step());
        }
        (self.finish(), timeline)
    }

    /// Summary of the totals so far
    pub fn result(&self) -> SimulationResult {
        let duration_s = self.config.duration_s;
        SimulationResult {
            duration_s,
            total_damage: self.total_damage,
            dps: self.total_damage / f64::from(duration_s.max(1)),
            breakdown: self.breakdown,
            final_rage: self.rage.rage(),
            casts: self.casts,
            shield_absorbed: self.shield.absorbed(),
        }
    }

    /// Attacker stats with live modifiers applied
    pub fn effective_attacker(&self) -> StatBlock {
        self.attacker_base.with_overlay(&self.attacker_mods.snapshot())
    }

    /// Defender stats with live modifiers applied; shield is the live pool
    pub fn effective_defender(&self) -> StatBlock {
        self.defender_base
            .with_overlay(&self.defender_mods.snapshot())
            .with_value(Stat::Shield, self.shield.remaining())
    }

    pub fn rage(&self) -> &RageResource {
        &self.rage
    }

    pub fn shield(&self) -> &Shield {
        &self.shield
    }

    pub fn time_s(&self) -> u32 {
        self.time_s
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn attacker_modifiers(&self) -> &ModifierManager {
        &self.attacker_mods
    }

    pub fn defender_modifiers(&self) -> &ModifierManager {
        &self.defender_mods
    }

    pub fn is_finished(&self) -> bool {
        self.time_s >= self.config.duration_s
    }

    fn finish(&self) -> SimulationResult {
        let result = self.result();
        debug!(
            hero = %self.hero_id,
            total_damage = result.total_damage,
            dps = result.dps,
            casts = result.casts,
            final_rage = result.final_rage,
            "simulation complete"
        );
        result
    }

    fn hit(&mut self, multiplier: f64) -> f64 {
        let attacker = self.effective_attacker();
        let defender = self.effective_defender();
        calculate_damage(&attacker, &defender, multiplier, self.options, &mut self.rng)
    }

    /// Push damage through the shield and book what gets past it
    fn apply_to_defender(&mut self, damage: f64) -> f64 {
        let (dealt, _) = self.shield.absorb(damage);
        self.total_damage += dealt;
        dealt
    }

    /// Returns the amounts credited to the skill and aoe_extra buckets
    fn cast_skill(&mut self) -> (f64, f64) {
        let primary = self.hit(self.skill_multiplier);

        let (skill, aoe_extra) = if self.config.target_count <= 1 {
            (self.apply_to_defender(primary), 0.0)
        } else {
            let extra_targets = f64::from(self.config.target_count - 1);
            let total = primary + primary * self.config.aoe_split_ratio * extra_targets;
            let dealt = self.apply_to_defender(total);
            (primary, (dealt - primary).max(0.0))
        };
        self.breakdown.skill += skill;
        self.breakdown.aoe_extra += aoe_extra;

        self.rage.cast();
        self.casts += 1;
        debug!(
            time_s = self.time_s,
            primary,
            skill,
            aoe_extra,
            rage = self.rage.rage(),
            "skill cast"
        );

        self.apply_skill_effects();
        (skill, aoe_extra)
    }

    fn apply_skill_effects(&mut self) {
        for effect in &self.skill_effects {
            let SkillEffect::Buff(buff) = effect else {
                continue;
            };
            let Some((stat, duration_s)) = buff.applicable() else {
                continue;
            };
            let side = match buff.target {
                EffectTarget::Attacker => &mut self.attacker_mods,
                EffectTarget::Defender => &mut self.defender_mods,
            };
            side.add(stat, buff.value, duration_s);
            debug!(
                target = ?buff.target,
                %stat,
                value = buff.value,
                duration_s,
                "modifier applied"
            );
        }
    }
}
