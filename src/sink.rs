//! Output sinks for translated pointer motion.
//!
//! The normalizer never talks to concrete UI or game code; it pushes into
//! these traits. The launcher injects its on-screen touchpad cursor as a
//! [`Touchpad`] and its game-loop bridge as a [`GameBridge`], and tests
//! substitute recording fakes.

use crate::tracker::MotionVector;

/// The launcher's on-screen touchpad cursor.
pub trait Touchpad {
    /// Whether the cursor is currently shown.
    fn display_state(&self) -> bool;

    /// Show or hide the cursor.
    fn enable(&mut self, enabled: bool);

    /// Move the cursor by a pre-scaled delta.
    fn apply_motion(&mut self, vector: &MotionVector);
}

/// Receives the game-side absolute cursor position.
pub trait CursorSink {
    fn send_cursor_pos(&mut self, x: f32, y: f32);
}

/// Receives discrete scroll ticks.
pub trait ScrollSink {
    fn send_scroll(&mut self, horizontal: f64, vertical: f64);
}

/// Receives mouse-button transitions.
pub trait ButtonSink {
    /// Forward a button transition. Returns whether the game consumed it.
    fn send_mouse_button(&mut self, button: u32, pressed: bool) -> bool;
}

/// The embedded game's full mouse surface.
///
/// Blanket-implemented for anything providing the three capability traits,
/// so a bridge type only implements the pieces.
pub trait GameBridge: CursorSink + ScrollSink + ButtonSink {}

impl<T: CursorSink + ScrollSink + ButtonSink> GameBridge for T {}
