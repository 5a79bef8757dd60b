//! Drives the normalizer with a scripted event sequence and prints what
//! reaches each sink. Run with `cargo run --example replay`.

use pointercap::{
    CapturedEvent, CaptureSettings, DeviceId, DeviceMeta, DeviceProbe, InputMode, LogBridge,
    MotionVector, Pointer, PointerCapture, SourceClass, Touchpad,
};

/// Touchpad sink that prints instead of drawing.
struct StdoutTouchpad {
    displayed: bool,
}

impl Touchpad for StdoutTouchpad {
    fn display_state(&self) -> bool {
        self.displayed
    }

    fn enable(&mut self, enabled: bool) {
        self.displayed = enabled;
        println!("[touchpad] cursor {}", if enabled { "shown" } else { "hidden" });
    }

    fn apply_motion(&mut self, vector: &MotionVector) {
        println!("[touchpad] move by ({:.1}, {:.1})", vector.x, vector.y);
    }
}

/// Pretends device 2 is a relative mouse, everything else a touchpad.
struct ScriptProbe;

impl DeviceProbe for ScriptProbe {
    fn has_relative_axes(&self, device: DeviceId) -> bool {
        device == 2
    }

    fn meta(&self, device: DeviceId) -> DeviceMeta {
        DeviceMeta {
            name: Some(if device == 2 { "replay-mouse" } else { "replay-pad" }.to_string()),
            source_bits: None,
            vendor_id: None,
            product_id: None,
            supports_relative_axes: device == 2,
        }
    }
}

fn main() {
    let settings = CaptureSettings {
        mouse_prescale: 2.0,
        scale_factor: 1.5,
        scroll_threshold: 4.0,
    };

    let mut capture = PointerCapture::new(
        settings,
        Box::new(ScriptProbe),
        Box::new(StdoutTouchpad { displayed: false }),
        Box::new(LogBridge::new()),
    );

    let pad = SourceClass::POINTER;
    let mouse = SourceClass::TRACKBALL;

    let script: Vec<(&str, CapturedEvent, InputMode)> = vec![
        (
            "finger down on the pad",
            CapturedEvent::motion(1, pad, vec![Pointer::new(0, 100.0, 100.0)]),
            InputMode::Touchpad,
        ),
        (
            "finger drags right",
            CapturedEvent::motion(1, pad, vec![Pointer::new(0, 112.0, 100.0)]),
            InputMode::Touchpad,
        ),
        (
            "second finger joins, both slide down",
            CapturedEvent::motion(
                1,
                pad,
                vec![Pointer::new(0, 112.0, 106.0), Pointer::new(1, 150.0, 106.0)],
            ),
            InputMode::Touchpad,
        ),
        (
            "fingers up",
            CapturedEvent::up(1, pad),
            InputMode::Touchpad,
        ),
        (
            "relative mouse takes over, game grabs the pointer",
            CapturedEvent::relative_motion(2, mouse, 3.0, -1.0),
            InputMode::Grabbed,
        ),
        (
            "left click in game",
            CapturedEvent::button(2, mouse, 1, true),
            InputMode::Grabbed,
        ),
        (
            "left release",
            CapturedEvent::button(2, mouse, 1, false),
            InputMode::Grabbed,
        ),
        (
            "mouse wheel",
            CapturedEvent::scroll(2, mouse, 0.0, 1.0),
            InputMode::Grabbed,
        ),
    ];

    for (label, event, mode) in script {
        let consumed = capture.handle(&event, mode);
        println!(
            "{label}: consumed={consumed} game_mouse={:?}",
            capture.mouse_position()
        );
    }
}
