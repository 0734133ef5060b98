// src/ui/tui.rs
//! Terminal lifecycle and the picker event loop.

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{Outcome, Picker};

const TICK_RATE: Duration = Duration::from_millis(200);

/// Run the picker dialog until it produces an outcome, restoring the
/// terminal before returning.
pub fn run(picker: &mut Picker) -> Result<Outcome> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = event_loop(&mut terminal, picker);

    // Restore the terminal whether or not the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    picker: &mut Picker,
) -> Result<Outcome> {
    loop {
        terminal.draw(|f| picker.draw(f))?;

        if event::poll(TICK_RATE)? {
            if let CEvent::Key(key) = event::read()? {
                // Windows delivers release events too; act on presses only.
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(outcome) = picker.on_key(key) {
                    return Ok(outcome);
                }
            }
        }
    }
}
