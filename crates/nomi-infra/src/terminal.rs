//! Crossterm-backed terminal cleanup.

use std::io::{IsTerminal, Write};

use crossterm::cursor::{MoveTo, Show};
use crossterm::style::ResetColor;
use crossterm::terminal::{Clear, ClearType};

use nomi_core::terminal::TerminalReset;

/// Clears the screen and scrollback on stdout.
///
/// Does nothing when stdout is not a terminal so piped transcripts stay free
/// of escape sequences. Write errors are ignored.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self
    }

    fn wipe(out: &mut impl Write) -> std::io::Result<()> {
        crossterm::execute!(
            out,
            Clear(ClearType::All),
            Clear(ClearType::Purge),
            MoveTo(0, 0)
        )
    }
}

impl TerminalReset for CrosstermTerminal {
    fn clear_screen(&self) {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return;
        }
        if let Err(e) = Self::wipe(&mut stdout) {
            tracing::debug!(error = %e, "failed to clear screen");
        }
    }

    fn reset(&self) {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return;
        }
        crossterm::terminal::disable_raw_mode().ok();
        let result = crossterm::execute!(stdout, ResetColor, Show);
        let result = result.and_then(|()| Self::wipe(&mut stdout));
        if let Err(e) = result {
            tracing::debug!(error = %e, "failed to reset terminal");
        }
    }
}
