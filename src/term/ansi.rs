//! Escape sequences for the terminal presenter.
//!
//! Fixed control strings are plain constants the caller pushes into its
//! output buffer. Only cursor addressing and SGR color/attribute selection
//! need formatting, and those emitters write into any `io::Write` sink so
//! tests can capture them in a `Vec<u8>`.

use std::io::{self, Write};

use crate::types::{Attr, Rgba};

/// Hide the cursor.
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Show the cursor.
pub const SHOW_CURSOR: &str = "\x1b[?25h";
/// Switch to the alternate screen buffer.
pub const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
/// Switch back to the main screen buffer.
pub const EXIT_ALT_SCREEN: &str = "\x1b[?1049l";
/// Erase the screen and scrollback, then home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[3J\x1b[H";
/// Open a synchronized update; the terminal holds output until the close.
pub const BEGIN_SYNC: &str = "\x1b[?2026h";
/// Close a synchronized update.
pub const END_SYNC: &str = "\x1b[?2026l";
/// Clear all SGR state, colors and attributes both.
pub const RESET_STYLE: &str = "\x1b[0m";
/// Button presses plus drag tracking, reported as SGR extended coordinates.
pub const ENABLE_MOUSE: &str = "\x1b[?1000h\x1b[?1002h\x1b[?1006h";
/// Undo mouse tracking, innermost mode first.
pub const DISABLE_MOUSE: &str = "\x1b[?1006l\x1b[?1002l\x1b[?1000l";

/// Address the cursor to a 0-based cell position.
pub fn cursor_to<W: Write>(w: &mut W, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Select the foreground color.
pub fn fg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    sgr_color(w, color, 0)
}

/// Select the background color.
pub fn bg<W: Write>(w: &mut W, color: Rgba) -> io::Result<()> {
    sgr_color(w, color, 10)
}

/// Shared color emitter. Background SGR codes are the foreground codes
/// shifted by ten: 39/49, 30-37/40-47, 90-97/100-107, 38/48.
fn sgr_color<W: Write>(w: &mut W, color: Rgba, shift: u8) -> io::Result<()> {
    if color.is_terminal_default() {
        return write!(w, "\x1b[{}m", 39 + shift);
    }
    if color.is_ansi() {
        let index = color.ansi_index();
        return match index {
            0..=7 => write!(w, "\x1b[{}m", 30 + shift + index),
            8..=15 => write!(w, "\x1b[{}m", 90 + shift + index - 8),
            _ => write!(w, "\x1b[{};5;{}m", 38 + shift, index),
        };
    }
    write!(w, "\x1b[{};2;{};{};{}m", 38 + shift, color.r, color.g, color.b)
}

/// SGR code for each attribute flag, in emission order.
const SGR_ATTRS: [(Attr, u8); 8] = [
    (Attr::BOLD, 1),
    (Attr::DIM, 2),
    (Attr::ITALIC, 3),
    (Attr::UNDERLINE, 4),
    (Attr::BLINK, 5),
    (Attr::INVERSE, 7),
    (Attr::HIDDEN, 8),
    (Attr::STRIKETHROUGH, 9),
];

/// Apply a set of attribute flags as one SGR sequence. Writes nothing for
/// the empty set.
pub fn attrs<W: Write>(w: &mut W, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    let mut sep = "";
    for (flag, code) in SGR_ATTRS {
        if attr.contains(flag) {
            write!(w, "{sep}{code}")?;
            sep = ";";
        }
    }
    w.write_all(b"m")
}

// =============================================================================
// Tests
// =============================================================================
