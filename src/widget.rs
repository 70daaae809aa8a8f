//! The widget: device + layout + surface + theme, wired together.
//!
//! [`AbacusWidget`] is the embedding boundary. The host attaches a surface
//! (and re-attaches on resize), feeds it pointer coordinates, and reads the
//! painted buffer back. All mutation enters through [`handle_click`] and
//! [`reset`]; value-change handlers fire synchronously inside those calls.
//!
//! # Example
//!
//! ```rust
//! use soroban_tui::widget::{AbacusConfig, AbacusWidget};
//!
//! let mut widget = AbacusWidget::new(AbacusConfig { rods: 3, ..Default::default() });
//! widget.attach_surface(40, 20);
//! assert_eq!(widget.value(), 0);
//! ```
//!
//! [`handle_click`]: AbacusWidget::handle_click
//! [`reset`]: AbacusWidget::reset

use crate::device::{Abacus, BEADS_PER_ROD};
use crate::geometry::Point;
use crate::layout::Metrics;
use crate::scene;
use crate::surface::FrameBuffer;
use crate::theme::Theme;

/// Identifies a registered value-change handler.
pub type HandlerId = usize;

type ValueHandler = Box<dyn FnMut(u64)>;

// =============================================================================
// AbacusConfig
// =============================================================================

/// Construction-time configuration.
#[derive(Debug, Clone)]
pub struct AbacusConfig {
    /// Number of rods, 1..=[`MAX_RODS`](crate::device::MAX_RODS).
    pub rods: usize,
    /// Colors for the scene.
    pub theme: Theme,
    /// Draw the value readout in the bottom frame bar.
    pub show_value: bool,
}

impl Default for AbacusConfig {
    fn default() -> Self {
        Self {
            rods: 9,
            theme: Theme::default(),
            show_value: true,
        }
    }
}

// =============================================================================
// AbacusWidget
// =============================================================================

/// An interactive soroban bound to a cell surface.
pub struct AbacusWidget {
    device: Abacus,
    metrics: Metrics,
    buffer: FrameBuffer,
    theme: Theme,
    show_value: bool,
    handlers: Vec<(HandlerId, ValueHandler)>,
    next_handler_id: HandlerId,
}

impl AbacusWidget {
    /// A widget with `config.rods` rods, painted at the minimum surface size
    /// until a real surface is attached.
    ///
    /// # Panics
    ///
    /// Panics if `config.rods` is outside `1..=MAX_RODS`.
    pub fn new(config: AbacusConfig) -> Self {
        let device = Abacus::new(config.rods);
        let metrics = Metrics::compute(0.0, 0.0, config.rods);
        let buffer = FrameBuffer::new(metrics.width() as u16, metrics.height() as u16);
        let mut widget = Self {
            device,
            metrics,
            buffer,
            theme: config.theme,
            show_value: config.show_value,
            handlers: Vec::new(),
            next_handler_id: 0,
        };
        widget.render();
        widget
    }

    /// Bind to a surface of `width` x `height` cells and redraw.
    ///
    /// Callable repeatedly; every layout constant is recomputed from the new
    /// size. Bead states are untouched.
    pub fn attach_surface(&mut self, width: u16, height: u16) {
        self.metrics = Metrics::compute(f32::from(width), f32::from(height), self.device.rod_count());
        self.buffer.resize(width.max(1), height.max(1));
        self.render();
    }

    /// Repaint the buffer from current state.
    pub fn render(&mut self) {
        scene::paint(&self.device, &self.metrics, &self.theme, self.show_value, &mut self.buffer);
    }

    /// Feed a pointer position in surface-local coordinates.
    ///
    /// Rods are scanned left to right, beads in storage order; the first bead
    /// whose octagon contains the point is toggled, the widget repaints, and
    /// value-change handlers fire with the new value. Returns true when a
    /// bead was hit. A miss changes nothing and fires nothing.
    pub fn handle_click(&mut self, x: f32, y: f32) -> bool {
        let Some((rod, slot)) = self.hit_bead(x, y) else {
            return false;
        };
        let value = self.device.toggle(rod, slot);
        self.render();
        self.fire(value);
        true
    }

    /// Release every bead. Repaints; handlers fire only if the value
    /// actually changed. Idempotent.
    pub fn reset(&mut self) {
        let changed = self.device.value() != 0;
        self.device.reset();
        self.render();
        if changed {
            self.fire(0);
        }
    }

    /// The current value, leftmost rod most significant.
    #[inline]
    pub fn value(&self) -> u64 {
        self.device.value()
    }

    /// Read access to the device state.
    #[inline]
    pub fn device(&self) -> &Abacus {
        &self.device
    }

    /// The current layout.
    #[inline]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The painted buffer, one frame behind nothing: every mutation repaints
    /// before returning.
    #[inline]
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// The active theme.
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap the theme and repaint.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.render();
    }

    /// Register a handler called with the new value after every change.
    pub fn on_value_change<F>(&mut self, handler: F) -> HandlerId
    where
        F: FnMut(u64) + 'static,
    {
        let id = self.next_handler_id;
        self.next_handler_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler by id. Unknown ids are ignored.
    pub fn remove_handler(&mut self, id: HandlerId) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
    }

    fn fire(&mut self, value: u64) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(value);
        }
    }

    fn hit_bead(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let point = Point::new(x, y);
        for rod in 0..self.device.rod_count() {
            for slot in 0..BEADS_PER_ROD {
                let polygon = self.metrics.bead_polygon(rod, self.device.rod(rod).bead(slot));
                if polygon.contains(point) {
                    return Some((rod, slot));
                }
            }
        }
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
