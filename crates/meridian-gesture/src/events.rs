//! Raw input and semantic gesture event types.
//!
//! Raw events are what a platform layer feeds into the
//! [`GestureRecognizer`](crate::recognizer::GestureRecognizer); semantic
//! events are what it emits through a [`GestureSink`](crate::sink::GestureSink).
//! Every raw event carries an [`Instant`] timestamp so velocity and timer
//! arithmetic stay deterministic under test.

use std::time::Instant;

use crate::geometry::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Number of modifiers currently held.
    pub fn pressed_count(&self) -> usize {
        usize::from(self.shift)
            + usize::from(self.control)
            + usize::from(self.alt)
            + usize::from(self.meta)
    }
}

/// The kind of device a pointer event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceKind {
    /// A touchscreen contact.
    #[default]
    Touch,
    /// A mouse pointer.
    Mouse,
    /// A stylus/pen.
    Pen,
}

/// Pointer buttons, for devices that have them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary,
    /// Secondary button (usually right); requests a context menu.
    Secondary,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Lifecycle edge reported with a semantic gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// The gesture crossed its recognition threshold.
    Started,
    /// The gesture progressed.
    Updated,
    /// The gesture completed normally.
    Ended,
    /// The gesture was cut short (e.g. host teardown).
    Cancelled,
}

/// A pointer (finger, mouse, pen) went down.
#[derive(Debug, Clone, Copy)]
pub struct PointerDownEvent {
    /// Stable identity for this contact, unique among concurrent contacts.
    pub id: u64,
    /// Down position.
    pub position: Point,
    /// Originating device.
    pub device: DeviceKind,
    /// Button for mouse/pen devices; `None` for touch contacts.
    pub button: Option<PointerButton>,
    /// When the contact went down.
    pub time: Instant,
}

/// A tracked pointer moved.
#[derive(Debug, Clone, Copy)]
pub struct PointerMoveEvent {
    /// Identity of the moving contact.
    pub id: u64,
    /// New position.
    pub position: Point,
    /// When the move was observed.
    pub time: Instant,
}

/// A tracked pointer lifted.
#[derive(Debug, Clone, Copy)]
pub struct PointerUpEvent {
    /// Identity of the lifted contact.
    pub id: u64,
    /// Final position.
    pub position: Point,
    /// When the contact lifted.
    pub time: Instant,
}

/// Any raw pointer lifecycle event.
#[derive(Debug, Clone, Copy)]
pub enum PointerInput {
    /// Pointer went down.
    Down(PointerDownEvent),
    /// Pointer moved.
    Move(PointerMoveEvent),
    /// Pointer lifted.
    Up(PointerUpEvent),
}

/// A single mouse-wheel scroll tick.
#[derive(Debug, Clone, Copy)]
pub struct WheelTick {
    /// Scroll delta in content units (lines are pre-scaled by the platform
    /// layer).
    pub delta: Point,
    /// Cursor position when the tick occurred.
    pub position: Point,
    /// When the tick occurred.
    pub time: Instant,
}

/// One step of a native trackpad pan/zoom/rotate gesture.
#[derive(Debug, Clone, Copy)]
pub struct TrackpadUpdate {
    /// Pan delta since the previous update.
    pub pan: Point,
    /// Cumulative scale factor since the gesture began (1.0 = unchanged).
    pub scale: f32,
    /// Rotation delta since the previous update, in degrees
    /// (counter-clockwise positive).
    pub rotation: f32,
    /// Cursor position for this update.
    pub position: Point,
    /// When the update occurred.
    pub time: Instant,
}

/// Pan gesture event.
///
/// The `Started` event reports the full accumulated offset that crossed the
/// recognition threshold; `Updated` events report the delta since the
/// previous emission.
#[derive(Debug, Clone, Copy)]
pub struct PanGestureEvent {
    /// Current pointer position.
    pub position: Point,
    /// Offset for this step (see type docs).
    pub offset: Point,
    /// Per-axis velocity in units per second, measured from the contact's
    /// down time.
    pub velocity: Point,
    /// Scalar speed in units per second.
    pub speed: f32,
    /// Lifecycle edge.
    pub state: GestureState,
}

/// Pinch gesture event.
///
/// For the touch path `scale` is the raw change in finger distance since the
/// baseline; for trackpad input it is the reported scale factor minus one.
/// `Started` always reports `scale == 1.0`.
#[derive(Debug, Clone, Copy)]
pub struct PinchGestureEvent {
    /// Midpoint of the two contacts (or cursor position for wheel/trackpad).
    pub center: Point,
    /// Scale value (see type docs).
    pub scale: f32,
    /// Lifecycle edge.
    pub state: GestureState,
}

/// Rotate gesture event.
///
/// Touch rotation is the negated swept angle; trackpad rotation is the raw
/// accumulated angle. Both are reported in radians.
#[derive(Debug, Clone, Copy)]
pub struct RotateGestureEvent {
    /// Midpoint of the two contacts (or cursor position for trackpad).
    pub center: Point,
    /// Signed rotation in radians.
    pub rotation: f32,
    /// Lifecycle edge.
    pub state: GestureState,
}

/// Swipe gesture event, emitted at most once per contact lift.
#[derive(Debug, Clone, Copy)]
pub struct SwipeGestureEvent {
    /// Position where the contact lifted.
    pub position: Point,
    /// Straight-line speed in units per second.
    pub speed: f32,
    /// Signed angle of the swipe line in radians, normalized from
    /// (-180, 180] degrees.
    pub angle: f32,
}

/// Context-menu request, from a secondary button or a completed long-press.
#[derive(Debug, Clone, Copy)]
pub struct ContextMenuEvent {
    /// Position where the menu was requested.
    pub position: Point,
}

static_assertions::assert_impl_all!(PanGestureEvent: Send, Sync);
static_assertions::assert_impl_all!(PinchGestureEvent: Send, Sync);
static_assertions::assert_impl_all!(RotateGestureEvent: Send, Sync);
static_assertions::assert_impl_all!(SwipeGestureEvent: Send, Sync);
static_assertions::assert_impl_all!(ContextMenuEvent: Send, Sync);
