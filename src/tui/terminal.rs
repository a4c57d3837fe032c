//! Terminal lifecycle for the dashboard.
//!
//! The dashboard takes over the terminal for its whole run: raw mode on
//! the alternate screen, restored on the way out so a crash report or a
//! propagated error prints onto a usable shell.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{Result, TapeviewError};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal and returns the handle the dashboard draws into.
///
/// Refuses to start when stdout is a pipe: the feed loop would run
/// headless and the raw-mode escape codes would corrupt the output.
///
/// # Errors
///
/// Returns [`TapeviewError::NotATty`] for non-interactive stdout, or the
/// underlying IO error if raw mode or the alternate screen cannot be
/// entered. Raw mode is rolled back before an error is returned.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(TapeviewError::NotATty);
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Hands the terminal back: cooked mode, main screen, cursor visible.
///
/// # Errors
///
/// Returns the underlying IO error if any restore step fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
