//! Buffered output and the escape-minimizing cell writer.

use std::borrow::Cow;
use std::io::{self, Write};

use super::ansi;
use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// OutputBuffer
// =============================================================================

/// Accumulates a frame's worth of bytes, then hits stdout once.
///
/// A single `write_all` per frame keeps partially drawn frames off the
/// wire and the syscall count flat no matter how many cells changed.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        // A fully styled first frame fits without reallocating.
        Self::with_capacity(16 * 1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Drop the contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.push_str(c.encode_utf8(&mut utf8));
    }

    /// Write everything to stdout in one call, then clear.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        if self.bytes.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.bytes)?;
        stdout.flush()?;
        self.bytes.clear();
        Ok(())
    }

    /// View the pending bytes as text.
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

// The ANSI emitters format into any io::Write sink; this lets them target
// the buffer directly.
impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Writes cells while mirroring the terminal's cursor and SGR state, so a
/// run of same-styled cells costs one escape sequence and then bare
/// characters.
///
/// A soroban frame is exactly that shape: wide bands of frame, rod and
/// bead color with a few glyphs riding on top.
#[derive(Debug, Default)]
pub struct StatefulCellRenderer {
    /// Cell the terminal cursor sits on, when known.
    cursor: Option<(u16, u16)>,
    fg: Option<Rgba>,
    bg: Option<Rgba>,
    attrs: Option<Attr>,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all mirrored state; the next cell re-emits everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Emit one cell, skipping escape codes the terminal already agrees on.
    pub fn render_cell(&mut self, out: &mut OutputBuffer, x: u16, y: u16, cell: &Cell) {
        if self.cursor != Some((x, y)) {
            ansi::cursor_to(out, x, y).ok();
        }

        // An SGR reset is the only reliable way to drop attributes, and it
        // wipes the colors with them.
        if self.attrs != Some(cell.attrs) {
            out.push_str(ansi::RESET_STYLE);
            ansi::attrs(out, cell.attrs).ok();
            self.attrs = Some(cell.attrs);
            self.fg = None;
            self.bg = None;
        }

        if self.fg != Some(cell.fg) {
            ansi::fg(out, cell.fg).ok();
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            ansi::bg(out, cell.bg).ok();
            self.bg = Some(cell.bg);
        }

        out.push_char(cell.glyph);

        // Printing advances the cursor one cell.
        self.cursor = Some((x + 1, y));
    }
}

// =============================================================================
// Tests
// =============================================================================
