//! Timeline tab view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    draw_sparkline(f, app, chunks[0]);
    draw_ticks(f, app, chunks[1]);
}

fn draw_sparkline(f: &mut Frame, app: &App, area: Rect) {
    let data: Vec<u64> = app
        .timeline
        .iter()
        .map(|tick| tick.total().max(0.0).round() as u64)
        .collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Damage per second "),
        )
        .data(&data)
        .style(Style::default().fg(Color::Yellow));

    f.render_widget(sparkline, area);
}

fn draw_ticks(f: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(Span::styled(
        format!(
            "{:>5} {:>10} {:>10} {:>10} {:>9} {:>9}",
            "t", "normal", "skill", "aoe", "rage", "shield"
        ),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![header];
    lines.extend(app.timeline.iter().skip(app.timeline_scroll).map(|tick| {
        let style = if tick.cast {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(Span::styled(
            format!(
                "{:>5} {:>10.1} {:>10.1} {:>10.1} {:>9.1} {:>9.1}",
                tick.time_s,
                tick.normal_dealt,
                tick.skill_dealt,
                tick.aoe_extra_dealt,
                tick.rage_after,
                tick.shield_after
            ),
            style,
        ))
    }));

    let title = format!(" Ticks ({} casts highlighted) ", app.result.casts);
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(paragraph, area);
}
