//! Input: crossterm events → widget events.
//!
//! The widget wants surface-local pointer points and a handful of keys;
//! everything else is noise. Conversion maps a left-button press on a cell
//! to that cell's center point, the same coordinate space the layout and
//! hit test use.
//!
//! # API
//!
//! - `convert_event` - Convert any crossterm event
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind, poll, read,
};
use std::time::Duration;

// =============================================================================
// Event types
// =============================================================================

/// Unified event type for the widget's event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer press, already mapped to the clicked cell's center.
    Pointer { x: f32, y: f32 },
    /// Key press.
    Key(KeyPress),
    /// Terminal resize event (new width, height).
    Resize(u16, u16),
    /// Event types the widget has no use for.
    None,
}

/// The keys the widget's hosts care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Other,
}

/// A key press with its control modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

// =============================================================================
// Conversion
// =============================================================================

/// Convert a crossterm event into an [`InputEvent`].
pub fn convert_event(event: CrosstermEvent) -> InputEvent {
    match event {
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::None,
    }
}

/// Convert a crossterm mouse event. Only left-button presses become pointer
/// events; the toggle happens on press, as on a physical bead.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> InputEvent {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => InputEvent::Pointer {
            x: f32::from(event.column) + 0.5,
            y: f32::from(event.row) + 0.5,
        },
        _ => InputEvent::None,
    }
}

/// Convert a crossterm key event. Releases are dropped so terminals that
/// report them do not double-fire.
pub fn convert_key_event(event: CrosstermKeyEvent) -> InputEvent {
    if event.kind == KeyEventKind::Release {
        return InputEvent::None;
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    };

    InputEvent::Key(KeyPress {
        key,
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
    })
}

// =============================================================================
// Polling
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event arrived within the timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// Tests
// =============================================================================
