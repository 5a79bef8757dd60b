//! The captured-pointer normalizer.
//!
//! [`PointerCapture`] is the single entry point of the crate: one call to
//! [`handle`](PointerCapture::handle) per OS input callback. It classifies
//! the originating device, derives a motion delta, and routes it to either
//! the launcher's touchpad cursor or the embedded game's mouse bridge
//! depending on the [`InputMode`] the caller passes in.
//!
//! Event delivery must be serialized; the normalizer owns no threads and
//! all of its state is mutated only inside `handle`.

use crate::device::{DeviceIdentityCache, DeviceProbe};
use crate::event::{CapturedEvent, PointerAction, SourceClass};
use crate::scroller::Scroller;
use crate::settings::CaptureSettings;
use crate::sink::{GameBridge, Touchpad};
use crate::tracker::{MotionVector, PointerTracker};

/// Who owns the pointer right now.
///
/// Decided by the caller per event; replaces the ambient grab flag the
/// platform layer keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// The launcher UI owns the pointer; motion moves the on-screen
    /// touchpad cursor, multi-finger motion scrolls.
    Touchpad,
    /// The game owns the pointer and expects relative mouse deltas.
    Grabbed,
}

/// Translates captured pointer events into cursor motion or game mouse
/// input.
pub struct PointerCapture {
    settings: CaptureSettings,
    probe: Box<dyn DeviceProbe>,
    touchpad: Box<dyn Touchpad>,
    bridge: Box<dyn GameBridge>,
    identity: DeviceIdentityCache,
    tracker: PointerTracker,
    scroller: Scroller,
    // Scratch delta, overwritten every event. Never hand out a reference
    // that outlives the call.
    vector: MotionVector,
    mouse_x: f32,
    mouse_y: f32,
}

impl PointerCapture {
    pub fn new(
        settings: CaptureSettings,
        probe: Box<dyn DeviceProbe>,
        touchpad: Box<dyn Touchpad>,
        bridge: Box<dyn GameBridge>,
    ) -> Self {
        Self {
            probe,
            touchpad,
            bridge,
            identity: DeviceIdentityCache::new(),
            tracker: PointerTracker::new(),
            scroller: Scroller::new(settings.scroll_threshold),
            vector: MotionVector::default(),
            mouse_x: 0.0,
            mouse_y: 0.0,
            settings,
        }
    }

    /// Current grabbed-mode absolute mouse position.
    pub fn mouse_position(&self) -> (f32, f32) {
        (self.mouse_x, self.mouse_y)
    }

    /// Seed the grabbed-mode absolute mouse position, typically when the
    /// game grabs the pointer mid-session.
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Drop multi-touch tracking state, for callers that lose pointer
    /// capture (window focus change, surface teardown).
    pub fn cancel_tracking(&mut self) {
        self.tracker.cancel_tracking();
    }

    /// Process one captured pointer event. Returns whether the event was
    /// consumed.
    pub fn handle(&mut self, event: &CapturedEvent, mode: InputMode) -> bool {
        let resolution = self.identity.resolve(event.device_id, self.probe.as_ref());
        if resolution.device_changed {
            self.tracker.cancel_tracking();
            log::debug!(
                "pointer device changed: id={} meta={:?}",
                event.device_id,
                self.probe.meta(event.device_id)
            );
        }

        // Determine if it's a relative-pointing device or a touchpad.
        if event.source.contains(SourceClass::TRACKBALL) {
            if resolution.supports_relative_axes {
                self.vector.set(event.relative_x, event.relative_y);
            } else {
                // Devices that claim the trackball class without relative
                // axes report usable deltas in their absolute coordinates.
                self.vector.set(event.x(), event.y());
            }
        } else {
            self.tracker.track_event(event, &mut self.vector);
        }

        self.vector.scale(self.settings.mouse_prescale);

        #[cfg(feature = "debug-log")]
        log::trace!(
            "event dev={} action={:?} pointers={} delta=({:.2}, {:.2})",
            event.device_id,
            event.action,
            event.pointer_count(),
            self.vector.x,
            self.vector.y,
        );

        match mode {
            InputMode::Touchpad => {
                self.enable_touchpad_if_necessary();
                if event.pointer_count() < 2 {
                    self.touchpad.apply_motion(&self.vector);
                    self.scroller.reset_overshoot();
                } else {
                    // Multi-finger motion is a scroll gesture, not cursor
                    // movement.
                    self.scroller
                        .perform_scroll(&self.vector, self.bridge.as_mut());
                }
            }
            InputMode::Grabbed => {
                self.mouse_x += self.vector.x * self.settings.scale_factor;
                self.mouse_y += self.vector.y * self.settings.scale_factor;
                self.bridge.send_cursor_pos(self.mouse_x, self.mouse_y);
            }
        }

        match event.action {
            PointerAction::Move => true,
            PointerAction::ButtonPress => self.bridge.send_mouse_button(event.action_button, true),
            PointerAction::ButtonRelease => {
                self.bridge.send_mouse_button(event.action_button, false)
            }
            PointerAction::Scroll => {
                self.bridge
                    .send_scroll(event.hscroll as f64, event.vscroll as f64);
                true
            }
            PointerAction::Up => {
                self.tracker.cancel_tracking();
                true
            }
            _ => false,
        }
    }

    fn enable_touchpad_if_necessary(&mut self) {
        if !self.touchpad.display_state() {
            self.touchpad.enable(true);
        }
    }
}
