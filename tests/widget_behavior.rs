//! End-to-end widget behavior through the public API.
//!
//! Drives AbacusWidget the way a host would:
//! - Pointer clicks at bead centers (computed from live metrics)
//! - Digit entry across rods and value accumulation
//! - Resize, theme switch, reset
//! - Value-change handler delivery and removal
//!
//! Run with: cargo test --test widget_behavior

use std::cell::RefCell;
use std::rc::Rc;

use soroban_tui::{AbacusConfig, AbacusWidget, MAX_RODS};

// =============================================================================
// Helpers
// =============================================================================

fn widget(rods: usize, width: u16, height: u16) -> AbacusWidget {
    let mut w = AbacusWidget::new(AbacusConfig {
        rods,
        ..Default::default()
    });
    w.attach_surface(width, height);
    w
}

/// Click the current center of a bead. Slot 0 is the heaven bead,
/// slots 1-4 are earth beads by order.
fn click_bead(widget: &mut AbacusWidget, rod: usize, slot: usize) -> bool {
    let center = widget
        .metrics()
        .bead_center(rod, widget.device().rod(rod).bead(slot));
    widget.handle_click(center.x, center.y)
}

/// Enter a digit on a rod that currently reads zero.
fn enter_digit(widget: &mut AbacusWidget, rod: usize, digit: u8) {
    assert!(digit <= 9);
    if digit >= 5 {
        assert!(click_bead(widget, rod, 0), "heaven click missed");
    }
    let earth = (digit % 5) as usize;
    if earth > 0 {
        assert!(click_bead(widget, rod, earth), "earth click missed");
    }
}

fn glyphs(widget: &AbacusWidget) -> String {
    let buffer = widget.buffer();
    let mut out = String::new();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if let Some(cell) = buffer.get(x, y) {
                out.push(cell.glyph);
            }
        }
        out.push('\n');
    }
    out
}

// =============================================================================
// Digit entry
// =============================================================================

#[test]
fn test_clicks_enter_digits_on_every_rod() {
    let mut w = widget(9, 100, 30);
    for (rod, digit) in (1u8..=9).enumerate() {
        enter_digit(&mut w, rod, digit);
    }
    assert_eq!(w.value(), 123_456_789);
}

#[test]
fn test_earth_click_cascades_on_one_rod_only() {
    let mut w = widget(3, 40, 20);

    // One click on order 3 drags orders 1 and 2 along
    assert!(click_bead(&mut w, 1, 3));
    assert_eq!(w.value(), 30);
    assert_eq!(w.device().rod(1).earth_active_count(), 3);
    assert_eq!(w.device().rod(0).value(), 0);
    assert_eq!(w.device().rod(2).value(), 0);
}

#[test]
fn test_active_earth_click_releases_outward() {
    let mut w = widget(3, 40, 20);
    assert!(click_bead(&mut w, 1, 3));
    assert_eq!(w.value(), 30);

    // Clicking active order 2 releases 2 and 3, leaving 1
    assert!(click_bead(&mut w, 1, 2));
    assert_eq!(w.value(), 10);
    assert_eq!(w.device().rod(1).earth_active_count(), 1);
}

#[test]
fn test_heaven_and_earth_compose() {
    let mut w = widget(3, 40, 20);
    enter_digit(&mut w, 2, 8);
    assert_eq!(w.value(), 8);
    assert!(w.device().rod(2).heaven_active());
    assert_eq!(w.device().rod(2).earth_active_count(), 3);
}

#[test]
fn test_max_rods_of_nines_fit() {
    let mut w = widget(MAX_RODS, 200, 30);
    for rod in 0..MAX_RODS {
        enter_digit(&mut w, rod, 9);
    }
    assert_eq!(w.value(), 9_999_999_999_999_999_999);
}

// =============================================================================
// Pointer misses
// =============================================================================

#[test]
fn test_misses_are_ignored() {
    let mut w = widget(3, 40, 20);
    enter_digit(&mut w, 0, 5);

    assert!(!w.handle_click(0.5, 0.5)); // frame corner
    assert!(!w.handle_click(13.5, 2.5)); // gap between rods
    assert!(!w.handle_click(500.0, 500.0)); // off-surface
    assert_eq!(w.value(), 500);
}

// =============================================================================
// Readout
// =============================================================================

#[test]
fn test_value_readout_painted() {
    let mut w = widget(3, 40, 20);
    enter_digit(&mut w, 0, 7);
    assert_eq!(w.value(), 700);
    assert!(
        glyphs(&w).contains("700"),
        "readout missing:\n{}",
        glyphs(&w)
    );
}

#[test]
fn test_readout_can_be_disabled() {
    let mut w = AbacusWidget::new(AbacusConfig {
        rods: 3,
        show_value: false,
        ..Default::default()
    });
    w.attach_surface(40, 20);
    enter_digit(&mut w, 0, 7);
    assert!(!glyphs(&w).contains("700"));
}

// =============================================================================
// Resize and theme
// =============================================================================

#[test]
fn test_resize_preserves_state_and_hits() {
    let mut w = widget(2, 40, 20);
    enter_digit(&mut w, 0, 4);
    enter_digit(&mut w, 1, 2);
    assert_eq!(w.value(), 42);

    w.attach_surface(120, 32);
    assert_eq!(w.value(), 42);

    // Clicks land at the recomputed bead positions
    assert!(click_bead(&mut w, 0, 0));
    assert_eq!(w.value(), 92);
}

#[test]
fn test_theme_switch_preserves_state() {
    let mut w = widget(3, 40, 20);
    enter_digit(&mut w, 1, 6);

    let midnight = soroban_tui::get_preset("midnight").unwrap();
    w.set_theme(midnight);
    assert_eq!(w.value(), 60);
    assert_eq!(w.theme().name, "midnight");
}

// =============================================================================
// Handlers and reset
// =============================================================================

#[test]
fn test_handler_stream_and_removal() {
    let mut w = widget(3, 40, 20);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_in_handler = Rc::clone(&seen);
    let id = w.on_value_change(move |value| {
        seen_in_handler.borrow_mut().push(value);
    });

    assert!(click_bead(&mut w, 0, 0)); // heaven on hundreds -> 500
    assert!(click_bead(&mut w, 1, 1)); // one earth on tens -> 510
    w.remove_handler(id);
    assert!(click_bead(&mut w, 2, 1)); // not delivered

    assert_eq!(*seen.borrow(), vec![500, 510]);
    assert_eq!(w.value(), 511);
}

#[test]
fn test_reset_clears_and_fires_once() {
    let mut w = widget(3, 40, 20);
    enter_digit(&mut w, 0, 9);
    enter_digit(&mut w, 2, 1);
    assert_eq!(w.value(), 901);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in_handler = Rc::clone(&seen);
    w.on_value_change(move |value| {
        seen_in_handler.borrow_mut().push(value);
    });

    w.reset();
    assert_eq!(w.value(), 0);
    for rod in w.device().rods() {
        assert_eq!(rod.value(), 0);
    }

    // Already zero: no second notification
    w.reset();
    assert_eq!(*seen.borrow(), vec![0]);
}
