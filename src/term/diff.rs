//! Frame-to-frame differential rendering.
//!
//! Fullscreen presentation keeps the previously shown frame and writes
//! only the cells that differ from it. Toggling a bead repaints a couple
//! of bead outlines and the readout; the other few thousand cells cost
//! nothing. Every frame goes out inside a synchronized update so the
//! terminal never shows a half-painted board.

use std::io;

use super::ansi;
use super::output::{OutputBuffer, StatefulCellRenderer};
use crate::surface::FrameBuffer;

/// Presents frames by diffing each one against the last.
pub struct DiffRenderer {
    output: OutputBuffer,
    pen: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            pen: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Present a frame, writing only cells that changed since the last one.
    ///
    /// Returns true if anything was written besides the sync markers.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let drawn = self.compose(buffer, false);
        self.output.flush_stdout()?;
        Ok(drawn)
    }

    /// Present a frame unconditionally, repainting every cell.
    ///
    /// For the first frame after entering fullscreen, and for recovery
    /// when a resize leaves stale cells on screen.
    pub fn render_full(&mut self, buffer: &FrameBuffer) -> io::Result<()> {
        self.compose(buffer, true);
        self.output.flush_stdout()
    }

    /// Drop the stored frame so the next render repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Whether a stored frame exists to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Build the escape stream for one frame into the output buffer.
    ///
    /// Pure buffer work with no terminal IO, which is what the tests poke.
    fn compose(&mut self, buffer: &FrameBuffer, full: bool) -> bool {
        self.output.push_str(ansi::BEGIN_SYNC);
        if full {
            ansi::cursor_to(&mut self.output, 0, 0).ok();
        }
        self.pen.reset();

        // Diff only against a same-sized frame; anything else repaints.
        let base = match &self.previous {
            Some(prev)
                if !full
                    && prev.width() == buffer.width()
                    && prev.height() == buffer.height() =>
            {
                Some(prev.cells())
            }
            _ => None,
        };

        let width = usize::from(buffer.width());
        let mut drawn = false;
        for (i, cell) in buffer.cells().iter().enumerate() {
            if base.is_some_and(|prev| prev[i] == *cell) {
                continue;
            }
            let x = (i % width) as u16;
            let y = (i / width) as u16;
            self.pen.render_cell(&mut self.output, x, y, cell);
            drawn = true;
        }

        self.output.push_str(ansi::END_SYNC);
        self.previous = Some(buffer.clone());
        drawn
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    const SYNC_ONLY: &str = "\x1b[?2026h\x1b[?2026l";

    #[test]
    fn test_starts_without_a_previous_frame() {
        assert!(!DiffRenderer::new().has_previous());
    }

    #[test]
    fn test_invalidate_drops_the_stored_frame() {
        let mut renderer = DiffRenderer::new();
        renderer.previous = Some(FrameBuffer::new(10, 10));
        renderer.invalidate();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_first_frame_renders_every_cell() {
        let mut renderer = DiffRenderer::new();
        let buffer = FrameBuffer::new(4, 2);

        assert!(renderer.compose(&buffer, false));
        assert!(renderer.has_previous());
        // 8 cells plus sync markers and escape codes.
        assert!(renderer.output.len() > SYNC_ONLY.len() + 8);
    }

    #[test]
    fn test_identical_frame_emits_nothing() {
        let mut renderer = DiffRenderer::new();
        let buffer = FrameBuffer::new(4, 2);

        renderer.compose(&buffer, false);
        renderer.output.clear();

        assert!(!renderer.compose(&buffer, false));
        assert_eq!(renderer.output.as_str().as_ref(), SYNC_ONLY);
    }

    #[test]
    fn test_changed_cell_is_rerendered() {
        let mut renderer = DiffRenderer::new();
        let mut buffer = FrameBuffer::new(4, 2);

        renderer.compose(&buffer, false);
        renderer.output.clear();

        buffer.draw_char(1, 1, '*', Rgba::WHITE, None, Attr::NONE);
        assert!(renderer.compose(&buffer, false));

        let out = renderer.output.as_str().into_owned();
        // Exactly one cell repositioned: row 2, column 2 (1-indexed).
        assert!(out.contains("\x1b[2;2H"), "output: {:?}", out);
        assert!(out.contains('*'));
    }

    #[test]
    fn test_resize_forces_full_repaint() {
        let mut renderer = DiffRenderer::new();
        renderer.compose(&FrameBuffer::new(4, 2), false);
        renderer.output.clear();

        // Same content, different dimensions: no valid diff base.
        assert!(renderer.compose(&FrameBuffer::new(5, 2), false));
    }

    #[test]
    fn test_full_redraw_ignores_previous() {
        let mut renderer = DiffRenderer::new();
        let buffer = FrameBuffer::new(4, 2);

        renderer.compose(&buffer, false);
        renderer.output.clear();

        assert!(renderer.compose(&buffer, true));
        // Homes the cursor before repainting.
        assert!(renderer.output.as_str().contains("\x1b[1;1H"));
    }
}
