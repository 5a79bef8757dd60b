//! Captured pointer events and source classification.
//!
//! Pointercap represents each OS input callback as one [`CapturedEvent`]: a
//! read-only record of everything the normalizer needs to classify and
//! translate the motion. Events are transient; they are consumed by a single
//! [`PointerCapture::handle`](crate::capture::PointerCapture::handle) call and
//! never persisted.
//!
//! ## Value conventions
//! - **Pointer coordinates:** absolute positions in the units the input stack
//!   reports (typically pixels). For touchpad-class devices these are touch
//!   positions on the pad surface, not screen positions.
//! - **Relative axes:** per-event deltas, populated only by devices that
//!   expose relative X/Y axes. Devices without those axes leave them at `0.0`.
//! - **Scroll axes:** device-native wheel values (`hscroll`/`vscroll`), only
//!   meaningful on [`PointerAction::Scroll`] events.
//!
//! ### Important: source classes are a bitmask
//! A device may carry several source classes at once (a mouse is both
//! `BUTTON` and `POINTER`). Classification checks class *bits*, never exact
//! equality, because quirky touchpads report themselves as trackballs and
//! vice versa.

use bitflags::bitflags;

use crate::device::DeviceId;

bitflags! {
    /// Source-class bits reported by the input stack for the originating
    /// device, matching the platform's `SOURCE_CLASS_*` constants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SourceClass: u32 {
        /// Device has buttons.
        const BUTTON = 0x01;
        /// Pointing device with on-screen coordinates (mouse, touchpad).
        const POINTER = 0x02;
        /// Relative-pointing device (trackball, captured relative mouse).
        const TRACKBALL = 0x04;
        /// Absolute-position device (touchscreen, tablet).
        const POSITION = 0x08;
        /// Joystick-class device.
        const JOYSTICK = 0x10;
    }
}

/// Action kind of a captured pointer event.
///
/// Only a subset is meaningful to the normalizer; anything else is reported
/// as not consumed so the caller can fall back to its own handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// First pointer went down.
    Down,
    /// Last pointer went up.
    Up,
    /// One or more pointers moved.
    Move,
    /// A secondary pointer went down.
    PointerDown,
    /// A secondary pointer went up.
    PointerUp,
    /// A physical mouse/pad button was pressed.
    ButtonPress,
    /// A physical mouse/pad button was released.
    ButtonRelease,
    /// Device-native scroll (wheel or pad edge), not gesture-derived.
    Scroll,
    /// Hover motion without contact.
    HoverMove,
    /// The gesture was aborted by the input stack.
    Cancel,
}

/// One touch contact or hover point within an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Stable pointer id, constant for the lifetime of the contact.
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// A single captured pointer event as delivered by the OS input stack.
///
/// All fields are plain data; constructing these by hand is supported and is
/// how tests and replays drive the normalizer.
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    /// Identifier of the originating input device.
    pub device_id: DeviceId,
    /// Source-class bitmask of the originating device.
    pub source: SourceClass,
    /// What happened.
    pub action: PointerAction,
    /// Button id for `ButtonPress`/`ButtonRelease`, `0` otherwise.
    pub action_button: u32,
    /// Active pointers, primary first. May be empty for button-only events.
    pub pointers: Vec<Pointer>,
    /// Relative X axis value, `0.0` when the device has no relative axes.
    pub relative_x: f32,
    /// Relative Y axis value, `0.0` when the device has no relative axes.
    pub relative_y: f32,
    /// Horizontal scroll axis value for `Scroll` events.
    pub hscroll: f32,
    /// Vertical scroll axis value for `Scroll` events.
    pub vscroll: f32,
}

impl CapturedEvent {
    /// A `Move` event carrying absolute pointer positions.
    pub fn motion(device_id: DeviceId, source: SourceClass, pointers: Vec<Pointer>) -> Self {
        Self {
            device_id,
            source,
            action: PointerAction::Move,
            action_button: 0,
            pointers,
            relative_x: 0.0,
            relative_y: 0.0,
            hscroll: 0.0,
            vscroll: 0.0,
        }
    }

    /// A `Move` event from a relative-axis device.
    pub fn relative_motion(device_id: DeviceId, source: SourceClass, dx: f32, dy: f32) -> Self {
        let mut event = Self::motion(device_id, source, vec![Pointer::new(0, 0.0, 0.0)]);
        event.relative_x = dx;
        event.relative_y = dy;
        event
    }

    /// A button press or release.
    pub fn button(device_id: DeviceId, source: SourceClass, button: u32, pressed: bool) -> Self {
        let mut event = Self::motion(device_id, source, Vec::new());
        event.action = if pressed {
            PointerAction::ButtonPress
        } else {
            PointerAction::ButtonRelease
        };
        event.action_button = button;
        event
    }

    /// A device-native scroll event.
    pub fn scroll(device_id: DeviceId, source: SourceClass, hscroll: f32, vscroll: f32) -> Self {
        let mut event = Self::motion(device_id, source, Vec::new());
        event.action = PointerAction::Scroll;
        event.hscroll = hscroll;
        event.vscroll = vscroll;
        event
    }

    /// A last-pointer-up event.
    pub fn up(device_id: DeviceId, source: SourceClass) -> Self {
        let mut event = Self::motion(device_id, source, Vec::new());
        event.action = PointerAction::Up;
        event
    }

    /// Number of active pointers.
    #[inline]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Absolute X of the primary pointer, `0.0` if there is none.
    #[inline]
    pub fn x(&self) -> f32 {
        self.pointers.first().map_or(0.0, |p| p.x)
    }

    /// Absolute Y of the primary pointer, `0.0` if there is none.
    #[inline]
    pub fn y(&self) -> f32 {
        self.pointers.first().map_or(0.0, |p| p.y)
    }

    /// Find a pointer by its stable id.
    pub fn pointer_by_id(&self, id: i32) -> Option<&Pointer> {
        self.pointers.iter().find(|p| p.id == id)
    }
}
