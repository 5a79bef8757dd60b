//! Motion scratch vector and multi-touch pointer tracking.
//!
//! Touchpad-class devices report absolute touch positions, not deltas.
//! [`PointerTracker`] follows one contact across successive events and
//! derives the per-event delta from its position change. When the followed
//! contact disappears (finger lifted, gesture handed to another finger) the
//! tracker re-anchors to the event's primary pointer with a zero delta so
//! the cursor never jumps.

use crate::event::CapturedEvent;

/// Reusable two-component motion delta.
///
/// Owned by the normalizer as a scratch field and overwritten on every
/// event. Callers must not retain it across `handle` calls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionVector {
    pub x: f32,
    pub y: f32,
}

impl MotionVector {
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.set(0.0, 0.0);
    }

    /// Multiply both components in place.
    #[inline]
    pub fn scale(&mut self, factor: f32) {
        self.x *= factor;
        self.y *= factor;
    }
}

#[derive(Clone, Copy, Debug)]
struct Anchor {
    pointer_id: i32,
    last_x: f32,
    last_y: f32,
}

/// Derives motion deltas from successive absolute touch positions.
#[derive(Debug, Default)]
pub struct PointerTracker {
    anchor: Option<Anchor>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a contact is currently being followed.
    pub fn is_tracking(&self) -> bool {
        self.anchor.is_some()
    }

    /// Update tracking state from `event` and write the derived delta into
    /// `vector`.
    ///
    /// The first event of a gesture, and any event where the followed
    /// pointer id is no longer present, anchors tracking and yields a zero
    /// delta.
    pub fn track_event(&mut self, event: &CapturedEvent, vector: &mut MotionVector) {
        let followed = match self.anchor {
            Some(anchor) => anchor,
            None => {
                self.re_anchor(event, vector);
                return;
            }
        };

        match event.pointer_by_id(followed.pointer_id) {
            Some(p) => {
                vector.set(p.x - followed.last_x, p.y - followed.last_y);
                self.anchor = Some(Anchor {
                    pointer_id: followed.pointer_id,
                    last_x: p.x,
                    last_y: p.y,
                });
            }
            None => self.re_anchor(event, vector),
        }
    }

    /// Forget the followed contact. The next event re-anchors with a zero
    /// delta.
    pub fn cancel_tracking(&mut self) {
        self.anchor = None;
    }

    fn re_anchor(&mut self, event: &CapturedEvent, vector: &mut MotionVector) {
        vector.clear();
        self.anchor = event.pointers.first().map(|p| Anchor {
            pointer_id: p.id,
            last_x: p.x,
            last_y: p.y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Pointer, SourceClass};

    fn touch(pointers: Vec<Pointer>) -> CapturedEvent {
        CapturedEvent::motion(1, SourceClass::POINTER, pointers)
    }

    #[test]
    fn test_first_event_anchors_with_zero_delta() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();

        tracker.track_event(&touch(vec![Pointer::new(0, 100.0, 50.0)]), &mut vector);
        assert_eq!(vector, MotionVector { x: 0.0, y: 0.0 });
        assert!(tracker.is_tracking());
    }

    #[test]
    fn test_successive_positions_become_deltas() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();

        tracker.track_event(&touch(vec![Pointer::new(0, 100.0, 50.0)]), &mut vector);
        tracker.track_event(&touch(vec![Pointer::new(0, 104.0, 47.0)]), &mut vector);
        assert_eq!(vector, MotionVector { x: 4.0, y: -3.0 });

        tracker.track_event(&touch(vec![Pointer::new(0, 104.0, 57.0)]), &mut vector);
        assert_eq!(vector, MotionVector { x: 0.0, y: 10.0 });
    }

    #[test]
    fn test_lifting_tracked_finger_re_anchors_without_jump() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();

        // Two fingers down, tracking follows pointer 0.
        tracker.track_event(
            &touch(vec![Pointer::new(0, 10.0, 10.0), Pointer::new(1, 200.0, 200.0)]),
            &mut vector,
        );
        tracker.track_event(
            &touch(vec![Pointer::new(0, 12.0, 10.0), Pointer::new(1, 200.0, 200.0)]),
            &mut vector,
        );
        assert_eq!(vector, MotionVector { x: 2.0, y: 0.0 });

        // Pointer 0 lifts; the far-away second finger must not produce a
        // 188-pixel jump.
        tracker.track_event(&touch(vec![Pointer::new(1, 200.0, 200.0)]), &mut vector);
        assert_eq!(vector, MotionVector { x: 0.0, y: 0.0 });

        tracker.track_event(&touch(vec![Pointer::new(1, 205.0, 201.0)]), &mut vector);
        assert_eq!(vector, MotionVector { x: 5.0, y: 1.0 });
    }

    #[test]
    fn test_cancel_tracking_resets_anchor() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();

        tracker.track_event(&touch(vec![Pointer::new(0, 10.0, 10.0)]), &mut vector);
        tracker.cancel_tracking();
        assert!(!tracker.is_tracking());

        tracker.track_event(&touch(vec![Pointer::new(0, 50.0, 50.0)]), &mut vector);
        assert_eq!(vector, MotionVector { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_event_without_pointers_clears_tracking() {
        let mut tracker = PointerTracker::new();
        let mut vector = MotionVector::default();

        tracker.track_event(&touch(vec![Pointer::new(0, 10.0, 10.0)]), &mut vector);
        tracker.track_event(&touch(Vec::new()), &mut vector);
        assert_eq!(vector, MotionVector { x: 0.0, y: 0.0 });
        assert!(!tracker.is_tracking());
    }
}
