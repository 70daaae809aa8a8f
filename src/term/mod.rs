//! Terminal presenter - the "blind" output layer.
//!
//! The presenter knows only about cells. It doesn't understand beads, rods,
//! or layout. It takes a filled FrameBuffer and outputs optimized ANSI
//! escape sequences to the terminal.
//!
//! # Pieces
//!
//! - [`TerminalSetup`]: raw mode, alternate screen, mouse tracking, with
//!   teardown in reverse order and best-effort restore on drop
//! - [`DiffRenderer`]: differential rendering (only outputs changed cells)
//! - [`StatefulCellRenderer`] / [`OutputBuffer`]: escape-code minimization
//!   and batched writes

pub mod ansi;
pub mod diff;
pub mod output;
pub mod setup;

// Re-exports for convenience
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
pub use setup::TerminalSetup;

/// Detect the terminal size in cells.
///
/// Falls back to 80x24 when the size can't be queried (not a TTY).
pub fn detect_size() -> (u16, u16) {
    match crossterm::terminal::size() {
        Ok((w, h)) if w > 0 && h > 0 => (w, h),
        _ => (80, 24),
    }
}
