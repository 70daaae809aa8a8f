//! Stateless layout: viewport size → device geometry.
//!
//! [`Metrics`] is a pure value computed from the surface size and rod count.
//! Horizontal constants (frame thickness, rod pitch, bead width) are linear
//! in the available width; the vertical structure is fixed: the heaven zone
//! is two bead heights plus one frame thickness tall, the earth zone five
//! bead heights, with the reckoning bar between them. Bead height follows
//! bead width but is clamped so the device fits the surface height.
//!
//! Nothing here is cached against the device: placement is a function of
//! (metrics, rod position, bead state), so resizing recomputes geometry
//! without touching any bead.

use crate::device::Bead;
use crate::geometry::{Point, Polygon};

/// Smallest surface the layout math accepts; smaller attaches are clamped.
pub const MIN_SURFACE_WIDTH: f32 = 16.0;
/// At this height a one-cell bead row still fits inside the frame.
pub const MIN_SURFACE_HEIGHT: f32 = 11.0;

/// Thickness of the reckoning bar, in cells.
const DIVIDER_THICKNESS: f32 = 1.0;

// =============================================================================
// Metrics
// =============================================================================

/// Every derived layout constant for one (surface, rod count) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    width: f32,
    height: f32,
    rods: usize,
    frame: f32,
    rod_pitch: f32,
    bead_width: f32,
    bead_height: f32,
    y_offset: f32,
}

impl Metrics {
    /// Compute the layout for a surface of `width` x `height` cells holding
    /// `rods` rods. Degenerate dimensions are clamped to the minimums first.
    pub fn compute(width: f32, height: f32, rods: usize) -> Self {
        let width = width.max(MIN_SURFACE_WIDTH);
        let height = height.max(MIN_SURFACE_HEIGHT);

        let frame = (width / 40.0).round().clamp(1.0, 3.0);
        let rod_pitch = (width - 2.0 * frame) / rods as f32;
        let bead_width = (rod_pitch * 0.8).max(3.0);

        // Top frame + heaven zone (2h + frame) + bar + earth zone (5h) +
        // bottom frame = 3 frames + bar + 7 bead heights.
        let height_cap = (height - 3.0 * frame - DIVIDER_THICKNESS) / 7.0;
        let bead_height = (bead_width * 0.5).min(height_cap).max(1.0);

        let device_height = 3.0 * frame + DIVIDER_THICKNESS + 7.0 * bead_height;
        let y_offset = ((height - device_height) / 2.0).max(0.0).floor();

        Self {
            width,
            height,
            rods,
            frame,
            rod_pitch,
            bead_width,
            bead_height,
            y_offset,
        }
    }

    /// Surface width after clamping.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height after clamping.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rod count this layout was computed for.
    #[inline]
    pub fn rod_count(&self) -> usize {
        self.rods
    }

    /// Frame bar thickness.
    #[inline]
    pub fn frame_thickness(&self) -> f32 {
        self.frame
    }

    /// Reckoning bar thickness.
    #[inline]
    pub fn divider_thickness(&self) -> f32 {
        DIVIDER_THICKNESS
    }

    /// Horizontal spacing between rod centers.
    #[inline]
    pub fn rod_pitch(&self) -> f32 {
        self.rod_pitch
    }

    /// Bead width.
    #[inline]
    pub fn bead_width(&self) -> f32 {
        self.bead_width
    }

    /// Bead height.
    #[inline]
    pub fn bead_height(&self) -> f32 {
        self.bead_height
    }

    /// Top edge of the device (the frame's outer top). The device is centered
    /// vertically when the surface is taller than it needs.
    #[inline]
    pub fn device_top(&self) -> f32 {
        self.y_offset
    }

    /// Total device height including both frame bars.
    #[inline]
    pub fn device_height(&self) -> f32 {
        3.0 * self.frame + DIVIDER_THICKNESS + 7.0 * self.bead_height
    }

    /// Bottom edge of the device (the frame's outer bottom).
    #[inline]
    pub fn device_bottom(&self) -> f32 {
        self.device_top() + self.device_height()
    }

    /// Inner top of the heaven zone (just below the top frame bar).
    #[inline]
    pub fn heaven_top(&self) -> f32 {
        self.y_offset + self.frame
    }

    /// Top of the reckoning bar.
    #[inline]
    pub fn divider_y(&self) -> f32 {
        self.heaven_top() + 2.0 * self.bead_height + self.frame
    }

    /// Inner top of the earth zone (just below the reckoning bar).
    #[inline]
    pub fn earth_top(&self) -> f32 {
        self.divider_y() + DIVIDER_THICKNESS
    }

    /// Inner bottom of the earth zone (just above the bottom frame bar).
    #[inline]
    pub fn earth_bottom(&self) -> f32 {
        self.earth_top() + 5.0 * self.bead_height
    }

    /// X coordinate of a rod's center, 0-based from the left.
    #[inline]
    pub fn rod_x(&self, rod: usize) -> f32 {
        self.frame + (rod as f32 + 0.5) * self.rod_pitch
    }

    /// Whether a rod carries a reckoning dot: every third rod, the run
    /// anchored on the middle rod.
    pub fn is_dot_rod(&self, rod: usize) -> bool {
        rod % 3 == (self.rods / 2) % 3
    }

    /// Center of a bead given its rod position and current state.
    ///
    /// The heaven bead rests at the top of its zone and drops against the
    /// bar when active. Earth bead of order k sits in slot k counting down
    /// from the bar, moving up one slot when active, so the gap in the stack
    /// is always directly below the pushed block.
    pub fn bead_center(&self, rod: usize, bead: &Bead) -> Point {
        let x = self.rod_x(rod);
        let half = self.bead_height / 2.0;
        let y = if bead.is_heaven() {
            if bead.is_active() {
                self.divider_y() - half
            } else {
                self.heaven_top() + half
            }
        } else {
            let slot = if bead.is_active() {
                bead.order() - 1
            } else {
                bead.order()
            };
            self.earth_top() + slot as f32 * self.bead_height + half
        };
        Point::new(x, y)
    }

    /// The bead's current silhouette, positioned for hit testing and drawing.
    pub fn bead_polygon(&self, rod: usize, bead: &Bead) -> Polygon {
        let center = self.bead_center(rod, bead);
        Polygon::bead(center.x, center.y, self.bead_width, self.bead_height)
    }
}

// =============================================================================
// Tests
// =============================================================================
