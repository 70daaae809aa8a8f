//! Themes: every color the scene paints with.
//!
//! A [`Theme`] is a plain bag of [`Rgba`] slots, one per visual element.
//! Three presets ship: `classic` (lacquered wood and ivory), `midnight`
//! (cool dark palette), and `terminal` (ANSI indices, respecting the user's
//! terminal scheme). Custom themes are just struct literals.

use crate::types::Rgba;

// =============================================================================
// Theme
// =============================================================================

/// Colors for one rendering of the device.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Preset name (e.g. "classic").
    pub name: String,
    /// Surface behind and around the frame.
    pub background: Rgba,
    /// Frame bars (top, bottom, sides).
    pub frame: Rgba,
    /// Reckoning bar line, drawn over the frame color.
    pub divider: Rgba,
    /// Reckoning dot marks on the bar.
    pub dot: Rgba,
    /// Rod wires.
    pub wire: Rgba,
    /// Heaven bead, counted.
    pub heaven_active: Rgba,
    /// Heaven bead, at rest.
    pub heaven_inactive: Rgba,
    /// Earth bead, counted.
    pub earth_active: Rgba,
    /// Earth bead, at rest.
    pub earth_inactive: Rgba,
    /// Value readout text in the bottom frame bar.
    pub readout: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        classic()
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Classic - lacquered wood frame, ivory earth beads, amber heaven beads.
pub fn classic() -> Theme {
    Theme {
        name: "classic".to_string(),
        background: Rgba::from_rgb_int(0x1c1814),
        frame: Rgba::from_rgb_int(0x5a3a22),
        divider: Rgba::from_rgb_int(0x31200f),
        dot: Rgba::from_rgb_int(0xd9b36c),
        wire: Rgba::from_rgb_int(0x8a7a5a),
        heaven_active: Rgba::from_rgb_int(0xd9a05a),
        heaven_inactive: Rgba::from_rgb_int(0x8f6a34),
        earth_active: Rgba::from_rgb_int(0xe8d9b0),
        earth_inactive: Rgba::from_rgb_int(0x9a8c68),
        readout: Rgba::from_rgb_int(0xf0e6d2),
    }
}

/// Midnight - cool dark palette, blue heaven beads, teal earth beads.
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        background: Rgba::from_rgb_int(0x14171c),
        frame: Rgba::from_rgb_int(0x2a3140),
        divider: Rgba::from_rgb_int(0x525d73),
        dot: Rgba::from_rgb_int(0x8fa3c8),
        wire: Rgba::from_rgb_int(0x3a4254),
        heaven_active: Rgba::from_rgb_int(0x7aa2f7),
        heaven_inactive: Rgba::from_rgb_int(0x3d5180),
        earth_active: Rgba::from_rgb_int(0x73daca),
        earth_inactive: Rgba::from_rgb_int(0x33584e),
        readout: Rgba::from_rgb_int(0xc0caf5),
    }
}

/// Terminal - ANSI palette indices, respecting the user's terminal scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        background: Rgba::TERMINAL_DEFAULT,
        frame: Rgba::ansi(3),            // yellow
        divider: Rgba::ansi(0),          // black, over the frame color
        dot: Rgba::ansi(11),             // bright yellow
        wire: Rgba::ansi(8),             // bright black
        heaven_active: Rgba::ansi(9),    // bright red
        heaven_inactive: Rgba::ansi(1),  // red
        earth_active: Rgba::ansi(15),    // bright white
        earth_inactive: Rgba::ansi(7),   // white
        readout: Rgba::ansi(0),
    }
}

/// Look up a preset by name (case-insensitive).
pub fn get_preset(name: &str) -> Option<Theme> {
    match name.to_lowercase().as_str() {
        "classic" => Some(classic()),
        "midnight" => Some(midnight()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

/// List all available preset names.
pub fn preset_names() -> &'static [&'static str] {
    &["classic", "midnight", "terminal"]
}

// =============================================================================
// Tests
// =============================================================================
