//! Terminal front end.
//!
//! A side panel with the current question, the elimination log and the
//! remaining candidates, next to a world map that follows the candidate
//! set. Digits `1`-`9` answer directly. The arrow keys move a cursor over
//! the options and `Enter` answers with it, which also reaches options
//! past the ninth. `r` resets and `q` or `Esc` quits.

mod app;
mod map_widget;
mod ui;

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info, instrument, warn};

use crate::core::{Dataset, GameConfig};

pub use app::App;
pub use map_widget::TerminalMap;

/// Raw mode plus the alternate screen, undone on drop.
///
/// Owned before the `Terminal` is built, so a failure there still
/// restores the shell.
struct ScreenGuard;

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to leave raw mode");
        }
    }
}

/// The terminal taken over for drawing, restored on drop.
pub struct TerminalGuard {
    // Field order is drop order: raw mode is left last.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _screen: ScreenGuard,
}

impl TerminalGuard {
    /// Take over the terminal.
    pub fn enter() -> io::Result<Self> {
        let screen = ScreenGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            _screen: screen,
        })
    }

    /// The terminal to draw on.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.show_cursor() {
            warn!(error = %err, "Failed to show cursor");
        }
    }
}

/// Play interactively until the user quits.
#[instrument(skip_all, fields(cities = dataset.catalog.len(), questions = dataset.question_count()))]
pub fn run(dataset: Dataset, config: GameConfig) -> io::Result<()> {
    info!("Starting terminal UI");

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(dataset, config);
    let result = event_loop(guard.terminal(), &mut app);

    // Detach the map before the terminal is restored.
    drop(app);
    drop(guard);

    info!("Terminal UI closed");
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_guard_leaves_raw_mode_off() {
        // Without a TTY `enter` fails. Either way nothing stays in raw mode.
        if let Ok(guard) = TerminalGuard::enter() {
            drop(guard);
        }
        assert!(!is_raw_mode_enabled().unwrap_or(false));
    }

    #[test]
    fn test_screen_guard_restores_on_early_exit() {
        let entered = ScreenGuard::enter().and_then(|screen| {
            let _screen = screen;
            Err::<(), _>(io::Error::other("terminal size unavailable"))
        });
        assert!(entered.is_err());
        assert!(!is_raw_mode_enabled().unwrap_or(false));
    }
}
