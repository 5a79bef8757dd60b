//! Gesture scroll accumulation.
//!
//! Two-finger touchpad motion becomes scrolling. Raw gesture deltas are too
//! small and too frequent to forward directly, so [`Scroller`] integrates
//! them per axis and emits whole scroll ticks once the accumulated motion
//! crosses a threshold, carrying the sub-threshold remainder (the
//! "overshoot") into the next call.

use crate::sink::ScrollSink;
use crate::tracker::MotionVector;

/// Accumulates gesture motion into discrete scroll ticks.
#[derive(Debug)]
pub struct Scroller {
    threshold: f32,
    overshoot_h: f32,
    overshoot_v: f32,
}

impl Scroller {
    /// `threshold` is the per-axis motion (in pre-scaled units) required for
    /// one scroll tick. Must be positive.
    pub fn new(threshold: f32) -> Self {
        debug_assert!(threshold > 0.0);
        Self {
            threshold,
            overshoot_h: 0.0,
            overshoot_v: 0.0,
        }
    }

    /// Consume one gesture delta. Emits the whole-tick quotient through
    /// `sink` when either axis crosses the threshold and keeps the
    /// remainder.
    pub fn perform_scroll<S: ScrollSink + ?Sized>(&mut self, vector: &MotionVector, sink: &mut S) {
        self.overshoot_h += vector.x;
        self.overshoot_v += vector.y;

        let ticks_h = (self.overshoot_h / self.threshold).trunc();
        let ticks_v = (self.overshoot_v / self.threshold).trunc();
        if ticks_h == 0.0 && ticks_v == 0.0 {
            return;
        }

        self.overshoot_h -= ticks_h * self.threshold;
        self.overshoot_v -= ticks_v * self.threshold;
        sink.send_scroll(ticks_h as f64, ticks_v as f64);
    }

    /// Discard carried overshoot. Called when a single-finger motion
    /// interrupts the scroll gesture.
    pub fn reset_overshoot(&mut self) {
        self.overshoot_h = 0.0;
        self.overshoot_v = 0.0;
    }
}
