//! UI rendering

mod stats_view;
mod summary_view;
mod timeline_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Summary => summary_view::draw(f, app, chunks[1]),
        Tab::Timeline => timeline_view::draw(f, app, chunks[1]),
        Tab::Stats => stats_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = [
        ("d", "Crit mode"),
        ("c", "Counter"),
        ("+/-", "Targets"),
        ("s", "Reseed"),
        ("Tab", "Next tab"),
        ("q", "Quit"),
    ];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Timeline => vec![("↑/↓", "Scroll")],
        Tab::Summary | Tab::Stats => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::White)));
    }

    if !tab_keys.is_empty() {
        spans.push(separator());
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.status)),
        )
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(Color::DarkGray))
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = format!(
        " {} vs {} ",
        app.attacker.hero_id, app.defender.hero_id
    );
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Text bar showing `current / max` of `width` cells
pub fn progress_bar(current: f64, max: f64, width: u16, filled_color: Color) -> Paragraph<'static> {
    let percent = if max > 0.0 {
        (current / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (percent * width as f64) as usize;
    let empty = (width as usize).saturating_sub(filled);

    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    Paragraph::new(bar).style(Style::default().fg(filled_color))
}

pub fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(format_value(value), Style::default().fg(Color::White)),
    ])
}

/// Show the value the formula will actually use, with the raw stat when clamping changed it
pub fn stat_line_with_effective(name: &str, raw: f64, effective: f64) -> Line<'static> {
    if (raw - effective).abs() < 1e-9 {
        stat_line(name, effective)
    } else {
        Line::from(vec![
            Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
            Span::styled(format_value(effective), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" (raw: {})", format_value(raw)),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }
}

/// Fractions keep precision, large totals do not
fn format_value(value: f64) -> String {
    if value.abs() < 10.0 {
        format!("{:.3}", value)
    } else {
        format!("{:.1}", value)
    }
}
