//! Conversion from winit events to the recognizer's raw input types.
//!
//! This is the only module that touches winit; the recognizer itself is
//! platform-agnostic. Timestamps are supplied by the caller because winit
//! events do not carry one.

use std::time::Instant;

use winit::event::{
    Modifiers, MouseButton as WinitMouseButton, MouseScrollDelta, Touch,
    TouchPhase as WinitTouchPhase,
};

use crate::events::{
    DeviceKind, KeyboardModifiers, PointerButton, PointerDownEvent, PointerInput,
    PointerMoveEvent, PointerUpEvent, WheelTick,
};
use crate::geometry::Point;

/// Scroll lines reported by winit are scaled to this many content units.
pub const LINE_SCROLL_UNITS: f32 = 20.0;

/// Converts a winit touch event into a raw pointer event.
///
/// Winit reports `Cancelled` contacts the same way as `Ended`; the
/// distinction is the host's to make via
/// [`cancel_all`](crate::GestureRecognizer::cancel_all).
pub fn from_winit_touch(touch: &Touch, time: Instant) -> PointerInput {
    let position = Point::new(touch.location.x as f32, touch.location.y as f32);
    match touch.phase {
        WinitTouchPhase::Started => PointerInput::Down(PointerDownEvent {
            id: touch.id,
            position,
            device: DeviceKind::Touch,
            button: None,
            time,
        }),
        WinitTouchPhase::Moved => PointerInput::Move(PointerMoveEvent {
            id: touch.id,
            position,
            time,
        }),
        WinitTouchPhase::Ended | WinitTouchPhase::Cancelled => {
            PointerInput::Up(PointerUpEvent {
                id: touch.id,
                position,
                time,
            })
        }
    }
}

/// Converts a winit mouse button to a pointer button.
///
/// Returns `None` for buttons with no gesture meaning.
pub fn from_winit_mouse_button(button: WinitMouseButton) -> Option<PointerButton> {
    match button {
        WinitMouseButton::Left => Some(PointerButton::Primary),
        WinitMouseButton::Right => Some(PointerButton::Secondary),
        WinitMouseButton::Middle => Some(PointerButton::Middle),
        WinitMouseButton::Back | WinitMouseButton::Forward | WinitMouseButton::Other(_) => None,
    }
}

/// Converts a winit scroll delta into a wheel tick at the given cursor
/// position.
///
/// Line deltas are scaled to a pixel equivalent; pixel deltas pass through.
pub fn from_winit_scroll_delta(
    delta: MouseScrollDelta,
    position: Point,
    time: Instant,
) -> WheelTick {
    let delta = match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            Point::new(x * LINE_SCROLL_UNITS, y * LINE_SCROLL_UNITS)
        }
        MouseScrollDelta::PixelDelta(pos) => Point::new(pos.x as f32, pos.y as f32),
    };
    WheelTick {
        delta,
        position,
        time,
    }
}

/// Converts winit modifier state.
pub fn from_winit_modifiers(modifiers: &Modifiers) -> KeyboardModifiers {
    let state = modifiers.state();
    KeyboardModifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}
