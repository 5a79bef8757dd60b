//! A game bridge that logs everything it receives.

use crate::sink::{ButtonSink, CursorSink, ScrollSink};

/// A [`GameBridge`](crate::sink::GameBridge) implementation that records the
/// last values it saw and reports them through the `log` facade. Useful as a
/// stand-in bridge in demos and while wiring up a launcher.
#[derive(Debug)]
pub struct LogBridge {
    /// Last absolute cursor position received, if any.
    pub last_cursor: Option<(f32, f32)>,
    /// Last scroll tick pair received, if any.
    pub last_scroll: Option<(f64, f64)>,
    /// Buttons are reported consumed when this is set (the default).
    pub consume_buttons: bool,
}

impl LogBridge {
    pub fn new() -> Self {
        Self {
            last_cursor: None,
            last_scroll: None,
            consume_buttons: true,
        }
    }
}

impl CursorSink for LogBridge {
    fn send_cursor_pos(&mut self, x: f32, y: f32) {
        self.last_cursor = Some((x, y));
        log::debug!("cursor pos -> ({x:.1}, {y:.1})");
    }
}

impl ScrollSink for LogBridge {
    fn send_scroll(&mut self, horizontal: f64, vertical: f64) {
        self.last_scroll = Some((horizontal, vertical));
        log::debug!("scroll -> h={horizontal:.1} v={vertical:.1}");
    }
}

impl ButtonSink for LogBridge {
    fn send_mouse_button(&mut self, button: u32, pressed: bool) -> bool {
        log::debug!("button {button} {}", if pressed { "pressed" } else { "released" });
        self.consume_buttons
    }
}
