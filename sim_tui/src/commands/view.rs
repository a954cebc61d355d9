//! Interactive results viewer

use super::SimArgs;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Browse results and re-run with different parameters
#[derive(Parser, Debug)]
pub struct View {
    #[command(flatten)]
    pub sim: SimArgs,
}

impl View {
    pub fn execute(self) -> Result<()> {
        let (catalog, scenario) = self.sim.load()?;
        let mut app = App::new(catalog, scenario)?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let outcome = event_loop(&mut terminal, &mut app);

        // Restore the terminal even when the loop failed
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        outcome
    }
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::Char('1'), _) => app.set_tab(0),
            (KeyCode::Char('2'), _) => app.set_tab(1),
            (KeyCode::Char('3'), _) => app.set_tab(2),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
            (KeyCode::Char('d'), _) => app.toggle_deterministic(),
            (KeyCode::Char('c'), _) => app.toggle_counter(),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.add_target(),
            (KeyCode::Char('-'), _) => app.remove_target(),
            (KeyCode::Char('s'), _) => app.reseed(),
            _ => {}
        }
    }
    Ok(())
}
