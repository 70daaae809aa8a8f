//! The drawing surface, a grid of styled character cells.
//!
//! The scene painter draws the whole board into this grid each frame; the
//! terminal only ever sees it through the diff renderer. Cells sit in one
//! flat row-major `Vec`.
//!
//! Two rules shape the primitives:
//!
//! - Background writes composite: an opaque or marker color replaces what
//!   is there, a translucent one blends over it.
//! - `fill_polygon` paints a cell when the cell's center lies inside the
//!   polygon. The pointer hit test samples the same centers, so a bead
//!   occupies exactly the cells that toggle it.

use crate::geometry::{Point, Polygon};
use crate::types::{Attr, Cell, Rgba};

/// Background write rule shared by every primitive.
fn composite(src: Rgba, over: Rgba) -> Rgba {
    if src.is_opaque() || src.is_terminal_default() || src.is_ansi() {
        src
    } else {
        Rgba::blend(src, over)
    }
}

/// A `width x height` grid of cells indexed from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }

    /// The cell at (x, y), or None outside the grid.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| &self.cells[self.index(x, y)])
    }

    #[inline]
    fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let i = self.index(x, y);
            Some(&mut self.cells[i])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to the default blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Blank every cell onto the given background.
    pub fn clear_with_bg(&mut self, bg: Rgba) {
        self.cells.fill(Cell::blank(bg));
    }

    /// Change dimensions, discarding the contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); usize::from(width) * usize::from(height)];
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Write one glyph with full styling. A `bg` of None lets the existing
    /// background show through. Returns false outside the grid.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        glyph: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
    ) -> bool {
        let Some(cell) = self.get_mut(x, y) else {
            return false;
        };
        if let Some(bg) = bg {
            cell.bg = composite(bg, cell.bg);
        }
        cell.glyph = glyph;
        cell.fg = fg;
        cell.attrs = attrs;
        true
    }

    /// Composite a background color into one cell, leaving glyph and
    /// foreground untouched.
    pub fn paint_bg(&mut self, x: u16, y: u16, bg: Rgba) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.bg = composite(bg, cell.bg);
        }
    }

    /// Blank a rectangle onto a background color. Clips to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgba) {
        let right = x.saturating_add(width).min(self.width);
        let bottom = y.saturating_add(height).min(self.height);
        for row in y..bottom {
            for col in x..right {
                let i = self.index(col, row);
                let cell = &mut self.cells[i];
                cell.bg = composite(bg, cell.bg);
                cell.glyph = ' ';
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Blank every cell whose center lies inside the polygon.
    ///
    /// Centers are the hit-test sample points, so the painted region and
    /// the clickable region agree cell for cell.
    pub fn fill_polygon(&mut self, polygon: &Polygon, bg: Rgba) {
        let (min, max) = polygon.bounds();
        let left = min.x.floor().max(0.0) as u16;
        let top = min.y.floor().max(0.0) as u16;
        let right = (max.x.ceil().max(0.0) as u16).min(self.width);
        let bottom = (max.y.ceil().max(0.0) as u16).min(self.height);

        for y in top..bottom {
            for x in left..right {
                let center = Point::new(f32::from(x) + 0.5, f32::from(y) + 0.5);
                if polygon.contains(center) {
                    let i = self.index(x, y);
                    let cell = &mut self.cells[i];
                    cell.bg = composite(bg, cell.bg);
                    cell.glyph = ' ';
                    cell.attrs = Attr::NONE;
                }
            }
        }
    }

    /// Write a run of text starting at (x, y). Control characters are
    /// dropped and text past the right edge is cut. Returns cells written.
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
    ) -> u16 {
        let mut col = x;
        for glyph in text.chars().filter(|c| !c.is_control()) {
            if col >= self.width {
                break;
            }
            self.draw_char(col, y, glyph, fg, bg, attrs);
            col += 1;
        }
        col - x
    }

    /// Write text centered in a span of `width` cells starting at x. Text
    /// wider than the span falls back to left alignment.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
    ) -> u16 {
        let glyphs = text.chars().filter(|c| !c.is_control()).count();
        let spare = usize::from(width).saturating_sub(glyphs);
        self.draw_text(x + (spare / 2) as u16, y, text, fg, bg, attrs)
    }

    /// Repeat a glyph horizontally, clipping at the right edge.
    pub fn draw_hline(&mut self, x: u16, y: u16, length: u16, glyph: char, fg: Rgba, bg: Option<Rgba>) {
        for col in x..x.saturating_add(length).min(self.width) {
            self.draw_char(col, y, glyph, fg, bg, Attr::NONE);
        }
    }

    /// Repeat a glyph vertically, clipping at the bottom edge.
    pub fn draw_vline(&mut self, x: u16, y: u16, length: u16, glyph: char, fg: Rgba, bg: Option<Rgba>) {
        for row in y..y.saturating_add(length).min(self.height) {
            self.draw_char(x, row, glyph, fg, bg, Attr::NONE);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = FrameBuffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
        assert_eq!(buffer.cells().len(), 80 * 24);
        assert!(buffer.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn test_draw_char_styles_one_cell() {
        let mut buffer = FrameBuffer::new(10, 10);
        let red = Rgba::rgb(255, 0, 0);
        assert!(buffer.draw_char(5, 5, 'X', red, Some(Rgba::BLACK), Attr::BOLD));

        let cell = buffer.get(5, 5).unwrap();
        assert_eq!(cell.glyph, 'X');
        assert_eq!(cell.fg, red);
        assert_eq!(cell.bg, Rgba::BLACK);
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_draw_char_without_bg_keeps_the_background() {
        let mut buffer = FrameBuffer::new(4, 4);
        let brown = Rgba::rgb(120, 80, 40);
        buffer.clear_with_bg(brown);
        buffer.draw_char(1, 1, '*', Rgba::WHITE, None, Attr::NONE);
        assert_eq!(buffer.get(1, 1).unwrap().bg, brown);
        assert_eq!(buffer.get(1, 1).unwrap().glyph, '*');
    }

    #[test]
    fn test_draw_char_outside_the_grid() {
        let mut buffer = FrameBuffer::new(10, 10);
        assert!(!buffer.draw_char(10, 0, 'X', Rgba::WHITE, None, Attr::NONE));
        assert!(!buffer.draw_char(0, 10, 'X', Rgba::WHITE, None, Attr::NONE));
    }

    #[test]
    fn test_fill_rect_covers_exactly_the_rectangle() {
        let mut buffer = FrameBuffer::new(20, 20);
        let blue = Rgba::rgb(0, 0, 255);
        buffer.fill_rect(5, 5, 10, 10, blue);

        assert_eq!(buffer.get(5, 5).unwrap().bg, blue);
        assert_eq!(buffer.get(14, 14).unwrap().bg, blue);
        assert_eq!(buffer.get(4, 5).unwrap().bg, Rgba::TERMINAL_DEFAULT);
        assert_eq!(buffer.get(15, 5).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut buffer = FrameBuffer::new(4, 4);
        buffer.fill_rect(0, 0, 4, 4, Rgba::rgb(100, 100, 100));
        buffer.fill_rect(0, 0, 4, 4, Rgba::new(200, 200, 200, 128));

        let bg = buffer.get(0, 0).unwrap().bg;
        assert!(bg.r > 100 && bg.r < 200);
        assert_eq!(bg.a, 255);
    }

    #[test]
    fn test_fill_polygon_paints_center_not_corners() {
        let mut buffer = FrameBuffer::new(20, 20);
        let green = Rgba::rgb(0, 255, 0);
        let bead = Polygon::bead(10.0, 10.0, 12.0, 6.0);
        buffer.fill_polygon(&bead, green);

        // Center of the bead.
        assert_eq!(buffer.get(10, 10).unwrap().bg, green);
        // Corners of the bounding box lie in the cut-off diagonals.
        assert_eq!(buffer.get(4, 7).unwrap().bg, Rgba::TERMINAL_DEFAULT);
        assert_eq!(buffer.get(15, 12).unwrap().bg, Rgba::TERMINAL_DEFAULT);
        // Nothing outside the bounding box is touched.
        assert_eq!(buffer.get(3, 10).unwrap().bg, Rgba::TERMINAL_DEFAULT);
        assert_eq!(buffer.get(10, 14).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_fill_polygon_clips_to_buffer() {
        let mut buffer = FrameBuffer::new(8, 8);
        // Polygon hangs off every edge; must not panic or wrap.
        let big = Polygon::bead(0.0, 0.0, 30.0, 30.0);
        buffer.fill_polygon(&big, Rgba::WHITE);
        assert_eq!(buffer.get(0, 0).unwrap().bg, Rgba::WHITE);
    }

    #[test]
    fn test_draw_text() {
        let mut buffer = FrameBuffer::new(20, 5);
        let used = buffer.draw_text(0, 0, "705", Rgba::WHITE, None, Attr::NONE);
        assert_eq!(used, 3);
        assert_eq!(buffer.get(0, 0).unwrap().glyph, '7');
        assert_eq!(buffer.get(1, 0).unwrap().glyph, '0');
        assert_eq!(buffer.get(2, 0).unwrap().glyph, '5');
    }

    #[test]
    fn test_draw_text_clips_at_the_edge() {
        let mut buffer = FrameBuffer::new(4, 2);
        let used = buffer.draw_text(2, 0, "1234", Rgba::WHITE, None, Attr::NONE);
        assert_eq!(used, 2);
        assert_eq!(buffer.get(3, 0).unwrap().glyph, '2');
    }

    #[test]
    fn test_draw_text_centered() {
        let mut buffer = FrameBuffer::new(11, 3);
        buffer.draw_text_centered(0, 1, 11, "705", Rgba::WHITE, None, Attr::NONE);
        assert_eq!(buffer.get(4, 1).unwrap().glyph, '7');
        assert_eq!(buffer.get(6, 1).unwrap().glyph, '5');
    }

    #[test]
    fn test_resize_discards_content() {
        let mut buffer = FrameBuffer::new(10, 10);
        buffer.draw_char(5, 5, 'X', Rgba::WHITE, Some(Rgba::BLACK), Attr::NONE);
        buffer.resize(30, 8);
        assert_eq!(buffer.width(), 30);
        assert_eq!(buffer.height(), 8);
        assert_eq!(buffer.get(5, 5).unwrap().glyph, ' ');
    }

    #[test]
    fn test_clear_with_bg() {
        let mut buffer = FrameBuffer::new(4, 4);
        let brown = Rgba::rgb(120, 80, 40);
        buffer.clear_with_bg(brown);
        assert_eq!(buffer.get(3, 3).unwrap().bg, brown);
        assert_eq!(buffer.get(0, 0).unwrap().glyph, ' ');
    }
}
