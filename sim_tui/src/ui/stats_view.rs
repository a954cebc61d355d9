//! Stats tab view

use super::{section, stat_line, stat_line_with_effective};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::app::App;
use sim_core::{HeroDefinition, Stat, StatBlock};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_side(f, " Attacker ", &app.attacker_stats, app.attacker_hero(), chunks[0]);
    draw_side(f, " Defender ", &app.defender_stats, app.defender_hero(), chunks[1]);
}

fn draw_side(
    f: &mut Frame,
    title: &str,
    stats: &StatBlock,
    hero: Option<&HeroDefinition>,
    area: Rect,
) {
    let mut lines = vec![section("Resolved")];
    for (stat, value) in stats.iter() {
        let line = match stat {
            Stat::CritChance => {
                stat_line_with_effective(stat.name(), value, stats.effective_crit_chance())
            }
            Stat::CritDamage => {
                stat_line_with_effective(stat.name(), value, stats.effective_crit_damage())
            }
            Stat::DamageReduction => {
                stat_line_with_effective(stat.name(), value, stats.effective_damage_reduction())
            }
            _ => stat_line(stat.name(), value),
        };
        lines.push(line);
    }

    if let Some(hero) = hero {
        lines.push(Line::from(""));
        lines.push(section("Hero"));
        lines.push(Line::from(format!("{} ({})", hero.name, hero.rarity)));
        lines.push(stat_line("Rage cost", f64::from(hero.rage_cost)));
        lines.push(stat_line("Skill multiplier", hero.skill_multiplier()));
        lines.push(stat_line("Skill effects", hero.skill_effects.len() as f64));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(paragraph, area);
}
