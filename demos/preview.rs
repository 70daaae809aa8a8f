//! Preview - paint a soroban without a terminal session.
//!
//! This example demonstrates the headless layers:
//! - Driving the Abacus state machine directly
//! - Computing layout metrics for a fixed viewport
//! - Painting the scene into a FrameBuffer and dumping it as text
//! - Widget hit testing and value-change callbacks, no TTY required
//!
//! Run with: cargo run --example preview

use std::cell::RefCell;
use std::rc::Rc;

use soroban_tui::{
    device::Abacus, layout::Metrics, scene, theme, AbacusConfig, AbacusWidget, FrameBuffer,
};

fn main() {
    // Seven rods showing 1 3 0 2 7 5 9. Slot 0 is the heaven bead; earth
    // slot k pushes orders 1..=k, so digit d is heaven (if d >= 5) plus
    // one earth toggle at d % 5.
    let mut device = Abacus::new(7);
    for (rod, digit) in [1u8, 3, 0, 2, 7, 5, 9].into_iter().enumerate() {
        if digit >= 5 {
            device.toggle(rod, 0);
        }
        let earth = (digit % 5) as usize;
        if earth > 0 {
            device.toggle(rod, earth);
        }
    }
    println!("Device value: {}", device.value());

    // A disabled rod paints dimmed but keeps its beads
    device.rod_mut(2).set_disabled(true);

    let metrics = Metrics::compute(64.0, 18.0, device.rod_count());
    let mut buffer = FrameBuffer::new(64, 18);
    scene::paint(&device, &metrics, &theme::classic(), true, &mut buffer);

    // Dump the glyph layer (colors dropped)
    for y in 0..buffer.height() {
        let mut line = String::new();
        for x in 0..buffer.width() {
            if let Some(cell) = buffer.get(x, y) {
                line.push(cell.glyph);
            }
        }
        println!("{}", line.trim_end());
    }

    // The widget layer adds hit testing and callbacks on top
    let mut widget = AbacusWidget::new(AbacusConfig {
        rods: 3,
        ..Default::default()
    });
    widget.attach_surface(40, 20);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in_handler = Rc::clone(&seen);
    widget.on_value_change(move |value| {
        seen_in_handler.borrow_mut().push(value);
    });

    // Click the heaven bead of the hundreds rod, then earth order 2 of the
    // ones rod
    let heaven = widget
        .metrics()
        .bead_center(0, widget.device().rod(0).bead(0));
    widget.handle_click(heaven.x, heaven.y);

    let earth = widget
        .metrics()
        .bead_center(2, widget.device().rod(2).bead(2));
    widget.handle_click(earth.x, earth.y);

    println!("\nClicked values: {:?}", seen.borrow());
    println!("Widget value: {}", widget.value());
}
