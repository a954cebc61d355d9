//! Summary tab view

use super::{progress_bar, section, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_totals(f, app, chunks[0]);
    draw_breakdown(f, app, chunks[1]);
}

fn draw_totals(f: &mut Frame, app: &App, area: Rect) {
    let result = &app.result;
    let config = &app.config;

    let mode = if config.deterministic {
        String::from("expected")
    } else {
        match config.seed {
            Some(seed) => format!("rolled (seed {seed})"),
            None => String::from("rolled"),
        }
    };

    let lines = vec![
        section("Result"),
        stat_line("Total damage", result.total_damage),
        stat_line("DPS", result.dps),
        stat_line("Skill casts", f64::from(result.casts)),
        stat_line("Final rage", result.final_rage),
        stat_line("Shield absorbed", result.shield_absorbed),
        Line::from(""),
        section("Run"),
        stat_line("Duration (s)", f64::from(result.duration_s)),
        stat_line("Targets", f64::from(config.target_count)),
        stat_line("AOE split ratio", config.aoe_split_ratio),
        Line::from(vec![
            Span::styled(format!("{:20}", "Counter"), Style::default().fg(Color::Gray)),
            Span::styled(
                if config.counter_enabled { "on" } else { "off" },
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{:20}", "Crits"), Style::default().fg(Color::Gray)),
            Span::styled(mode, Style::default().fg(Color::White)),
        ]),
        stat_line("Defense constant", config.defense_constant),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Totals "));
    f.render_widget(paragraph, area);
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Breakdown ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let breakdown = &app.result.breakdown;
    let total = breakdown.sum();
    let buckets = [
        ("Normal", breakdown.normal, Color::White),
        ("Skill", breakdown.skill, Color::Magenta),
        ("AOE extra", breakdown.aoe_extra, Color::Cyan),
    ];

    for (i, (name, value, color)) in buckets.into_iter().enumerate() {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        let label = Paragraph::new(Line::from(vec![
            Span::styled(format!("{:10}", name), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:.1} ({:.1}%)", value, share), Style::default().fg(color)),
        ]));
        f.render_widget(label, rows[i * 2]);
        f.render_widget(progress_bar(value, total, rows[i * 2 + 1].width, color), rows[i * 2 + 1]);
    }
}
