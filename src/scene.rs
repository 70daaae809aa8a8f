//! Scene painting: device + metrics + theme → cells.
//!
//! [`paint`] is a pure function of its inputs; it owns no state and draws the
//! whole scene back to front: background, rod wires, beads, frame bars, the
//! reckoning dots, the bar line over the dots, and finally the value readout
//! in the bottom bar. Redrawing is always a full repaint; the diff renderer
//! keeps the terminal traffic small, not the painter.

use crate::device::{Abacus, Bead, BeadKind, Rod};
use crate::layout::Metrics;
use crate::surface::FrameBuffer;
use crate::theme::Theme;
use crate::types::Attr;

/// Dim factor applied to wires and beads of disabled or invisible rods.
const ROD_DIM: f32 = 0.45;

// =============================================================================
// Cell rasterization
// =============================================================================

/// Cells whose centers lie in the half-open band `[start, end)`.
fn cells_in(start: f32, end: f32) -> std::ops::Range<u16> {
    let lo = (start - 0.5).ceil().max(0.0) as u16;
    let hi = (end - 0.5).ceil().max(0.0) as u16;
    lo..hi.max(lo)
}

/// The cell whose center is nearest to `pos`.
fn cell_near(pos: f32) -> u16 {
    (pos - 0.5).round().max(0.0) as u16
}

// =============================================================================
// Painting
// =============================================================================

/// Paint one full frame of the device onto `buffer`.
pub fn paint(device: &Abacus, metrics: &Metrics, theme: &Theme, show_value: bool, buffer: &mut FrameBuffer) {
    buffer.clear_with_bg(theme.background);

    draw_wires(device, metrics, theme, buffer);
    draw_beads(device, metrics, theme, buffer);
    draw_frame(metrics, theme, buffer);
    draw_bar(device, metrics, theme, buffer);

    if show_value {
        draw_readout(device, metrics, theme, buffer);
    }
}

fn rod_is_dim(rod: &Rod) -> bool {
    rod.is_disabled() || rod.is_invisible()
}

fn draw_wires(device: &Abacus, metrics: &Metrics, theme: &Theme, buffer: &mut FrameBuffer) {
    let rows = cells_in(metrics.heaven_top(), metrics.earth_bottom());
    for (i, rod) in device.rods().iter().enumerate() {
        let color = if rod_is_dim(rod) {
            theme.wire.dim(ROD_DIM)
        } else {
            theme.wire
        };
        let col = cell_near(metrics.rod_x(i));
        buffer.draw_vline(col, rows.start, rows.len() as u16, '│', color, None);
    }
}

fn draw_beads(device: &Abacus, metrics: &Metrics, theme: &Theme, buffer: &mut FrameBuffer) {
    for (i, rod) in device.rods().iter().enumerate() {
        let dim = rod_is_dim(rod);
        for bead in rod.beads() {
            let mut color = bead_color(bead, theme);
            if dim {
                color = color.dim(ROD_DIM);
            }
            buffer.fill_polygon(&metrics.bead_polygon(i, bead), color);
        }
    }
}

fn bead_color(bead: &Bead, theme: &Theme) -> crate::types::Rgba {
    match (bead.kind(), bead.is_active()) {
        (BeadKind::Heaven, true) => theme.heaven_active,
        (BeadKind::Heaven, false) => theme.heaven_inactive,
        (BeadKind::Earth, true) => theme.earth_active,
        (BeadKind::Earth, false) => theme.earth_inactive,
    }
}

fn draw_frame(metrics: &Metrics, theme: &Theme, buffer: &mut FrameBuffer) {
    let width = buffer.width();
    let frame = metrics.frame_thickness();

    let top = cells_in(metrics.device_top(), metrics.device_top() + frame);
    buffer.fill_rect(0, top.start, width, top.len() as u16, theme.frame);

    let bottom = cells_in(metrics.earth_bottom(), metrics.device_bottom());
    buffer.fill_rect(0, bottom.start, width, bottom.len() as u16, theme.frame);

    let sides = cells_in(metrics.device_top(), metrics.device_bottom());
    let left = cells_in(0.0, frame);
    buffer.fill_rect(left.start, sides.start, left.len() as u16, sides.len() as u16, theme.frame);
    let right = cells_in(metrics.width() - frame, metrics.width());
    buffer.fill_rect(right.start, sides.start, right.len() as u16, sides.len() as u16, theme.frame);
}

/// The reckoning bar: frame-colored band, dot marks, then the bar line.
/// The line is drawn last so it sits above the dots; the dots stay visible
/// as the background under its glyphs.
fn draw_bar(device: &Abacus, metrics: &Metrics, theme: &Theme, buffer: &mut FrameBuffer) {
    let band = cells_in(metrics.divider_y(), metrics.divider_y() + metrics.divider_thickness());
    let row = band.start;
    buffer.fill_rect(0, row, buffer.width(), band.len() as u16, theme.frame);

    for (i, _) in device.rods().iter().enumerate() {
        if metrics.is_dot_rod(i) {
            buffer.paint_bg(cell_near(metrics.rod_x(i)), row, theme.dot);
        }
    }

    buffer.draw_hline(0, row, buffer.width(), '━', theme.divider, None);
}

fn draw_readout(device: &Abacus, metrics: &Metrics, theme: &Theme, buffer: &mut FrameBuffer) {
    let bottom = cells_in(metrics.earth_bottom(), metrics.device_bottom());
    if bottom.is_empty() {
        return;
    }
    let row = bottom.start + (bottom.len() as u16) / 2;
    let text = device.value().to_string();
    buffer.draw_text_centered(0, row, buffer.width(), &text, theme.readout, None, Attr::BOLD);
}

// =============================================================================
// Tests
// =============================================================================
