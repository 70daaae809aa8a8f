//! Interactive soroban - click beads, watch the value change.
//!
//! This example demonstrates the full pipeline:
//! - Fullscreen terminal session with SGR mouse tracking
//! - Pointer clicks toggling beads (with push/release cascades)
//! - Differential rendering between frames
//! - Theme cycling, reset, and resize handling
//!
//! Keys: click beads / r reset / t next theme / q or Esc quit
//!
//! Run with: cargo run --example interactive

use std::time::Duration;

use soroban_tui::{
    detect_size, get_preset, poll_event, preset_names, AbacusConfig, AbacusWidget, DiffRenderer,
    InputEvent, Key, TerminalSetup,
};

fn main() -> std::io::Result<()> {
    let mut setup = TerminalSetup::new();
    setup.enter_fullscreen()?;

    // Nine rods, classic palette, value readout on
    let mut widget = AbacusWidget::new(AbacusConfig::default());
    let (width, height) = detect_size();
    widget.attach_surface(width, height);

    let mut renderer = DiffRenderer::new();
    renderer.render_full(widget.buffer())?;

    let mut theme_index = 0usize;
    let mut running = true;

    while running {
        let Some(event) = poll_event(Duration::from_millis(50))? else {
            continue;
        };

        match event {
            InputEvent::Pointer { x, y } => {
                // Only re-render when the click actually moved beads
                if widget.handle_click(x, y) {
                    renderer.render(widget.buffer())?;
                }
            }
            InputEvent::Resize(w, h) => {
                widget.attach_surface(w, h);
                renderer.invalidate();
                renderer.render_full(widget.buffer())?;
            }
            InputEvent::Key(press) => match press.key {
                Key::Char('q') | Key::Escape => running = false,
                Key::Char('c') if press.ctrl => running = false,
                Key::Char('r') => {
                    widget.reset();
                    renderer.render(widget.buffer())?;
                }
                Key::Char('t') => {
                    theme_index = (theme_index + 1) % preset_names().len();
                    if let Some(theme) = get_preset(preset_names()[theme_index]) {
                        widget.set_theme(theme);
                        renderer.render(widget.buffer())?;
                    }
                }
                _ => {}
            },
            InputEvent::None => {}
        }
    }

    setup.exit_fullscreen()?;
    println!("Final value: {}", widget.value());
    Ok(())
}
