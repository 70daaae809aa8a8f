//! Session setup and restore for fullscreen use.
//!
//! `TerminalSetup` flips the terminal into the state the widget needs (raw
//! mode, alternate screen, hidden cursor, SGR mouse reports) and puts each
//! of those back on exit. Restore also runs from Drop, so a panic unwinding
//! through the event loop does not strand the user's shell.
//!
//! Raw mode goes through crossterm; the rest are plain escape sequences.

use std::io::{self, IsTerminal};

use crossterm::terminal;

use super::ansi;
use super::output::OutputBuffer;

/// Tracks which terminal modes this session owns, so restore undoes
/// exactly what setup did.
#[derive(Debug, Default)]
pub struct TerminalSetup {
    raw: bool,
    fullscreen: bool,
}

impl TerminalSetup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to the alternate screen with mouse reporting on.
    ///
    /// Without a TTY on stdin (piped input, CI) raw mode is skipped and
    /// the session simply receives no keyboard events.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        if io::stdin().is_terminal() {
            terminal::enable_raw_mode()?;
            self.raw = true;
        }

        let mut out = OutputBuffer::new();
        out.push_str(ansi::ENTER_ALT_SCREEN);
        out.push_str(ansi::HIDE_CURSOR);
        out.push_str(ansi::CLEAR_SCREEN);
        out.push_str(ansi::ENABLE_MOUSE);
        out.flush_stdout()?;

        self.fullscreen = true;
        Ok(())
    }

    /// Undo [`enter_fullscreen`](Self::enter_fullscreen), innermost change
    /// first.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        let mut out = OutputBuffer::new();
        out.push_str(ansi::DISABLE_MOUSE);
        out.push_str(ansi::RESET_STYLE);
        out.push_str(ansi::SHOW_CURSOR);
        out.push_str(ansi::EXIT_ALT_SCREEN);
        out.flush_stdout()?;

        if self.raw {
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        self.fullscreen = false;
        Ok(())
    }
}

impl Drop for TerminalSetup {
    fn drop(&mut self) {
        if self.fullscreen {
            let _ = self.exit_fullscreen();
        }
    }
}
