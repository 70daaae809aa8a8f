//! # soroban-tui
//!
//! Interactive soroban (Japanese abacus) widget for the terminal.
//!
//! A soroban rod carries one heaven bead worth five and four earth beads
//! worth one each; beads activate by moving toward the reckoning bar, and
//! the active beads of each rod read as a decimal digit. This crate models
//! that device, draws it as octagonal beads on a cell surface, and turns
//! pointer clicks back into bead movements.
//!
//! ## Architecture
//!
//! The crate is a straight-line pipeline from pointer to glyphs:
//!
//! ```text
//! InputEvent → AbacusWidget::handle_click → Abacus (bead state)
//!            → layout::Metrics → scene::paint → FrameBuffer → DiffRenderer
//! ```
//!
//! Every stage is pure except the ends: input conversion reads crossterm
//! events, and the presenter writes ANSI to stdout. Everything in between
//! is deterministic and testable without a terminal.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Attr, Cell)
//! - [`device`] - Bead/rod/abacus state machine and value computation
//! - [`geometry`] - Octagon silhouettes and point-in-polygon hit testing
//! - [`layout`] - Viewport-derived metrics (frame, pitch, bead sizes)
//! - [`surface`] - FrameBuffer cell grid and polygon rasterization
//! - [`theme`] - Color palettes for the device parts
//! - [`scene`] - Paints the device onto a FrameBuffer
//! - [`widget`] - The interactive widget: clicks, callbacks, resize
//! - [`input`] - crossterm event conversion and polling
//! - [`term`] - Terminal presenter (ANSI output, diff rendering)

pub mod device;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod scene;
pub mod surface;
pub mod term;
pub mod theme;
pub mod types;
pub mod widget;

// Re-export commonly used items
pub use types::*;

pub use device::{Abacus, Bead, BeadKind, Rod, BEADS_PER_ROD, MAX_RODS};

pub use geometry::{Point, Polygon};

pub use layout::{Metrics, MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH};

pub use surface::FrameBuffer;

pub use theme::{get_preset, preset_names, Theme};

pub use widget::{AbacusConfig, AbacusWidget, HandlerId};

pub use input::{poll_event, read_event, InputEvent, Key, KeyPress};

pub use term::{detect_size, DiffRenderer, OutputBuffer, TerminalSetup};
