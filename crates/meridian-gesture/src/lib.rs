//! Meridian Gesture - compound pointer gesture recognition.
//!
//! Ingests raw pointer, mouse-wheel, and trackpad events and emits
//! disambiguated pan, pinch, rotate, swipe, and long-press/context-menu
//! gestures with start/update/end/cancel semantics.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use meridian_gesture::{
//!     CollectedGestures, DeviceKind, GestureConfig, GestureRecognizer, Point,
//!     PointerDownEvent, PointerMoveEvent,
//! };
//!
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default());
//! let mut gestures = CollectedGestures::new();
//! let t0 = Instant::now();
//!
//! recognizer.pointer_down(
//!     PointerDownEvent {
//!         id: 1,
//!         position: Point::ZERO,
//!         device: DeviceKind::Touch,
//!         button: None,
//!         time: t0,
//!     },
//!     &mut gestures,
//! );
//! recognizer.pointer_move(
//!     PointerMoveEvent { id: 1, position: Point::new(12.0, 0.0), time: t0 },
//!     &mut gestures,
//! );
//!
//! for gesture in gestures.drain() {
//!     println!("{gesture:?}");
//! }
//! ```
//!
//! Embedders using winit convert platform events through the [`platform`]
//! module and call [`GestureRecognizer::process_timers`] from their event
//! loop so long-press and wheel-quiescence deadlines can fire.

pub mod config;
pub mod events;
pub mod fingers;
pub mod geometry;
pub mod keyboard;
pub mod kinematics;
pub mod platform;
pub mod recognizer;
pub mod sink;
mod trackpad;
mod wheel;

pub use config::{DirectionFilter, GestureConfig};
pub use events::{
    ContextMenuEvent, DeviceKind, GestureState, KeyboardModifiers, PanGestureEvent,
    PinchGestureEvent, PointerButton, PointerDownEvent, PointerInput, PointerMoveEvent,
    PointerUpEvent, RotateGestureEvent, SwipeGestureEvent, TrackpadUpdate, WheelTick,
};
pub use geometry::Point;
pub use keyboard::{ModifierState, ModifierTracker};
pub use recognizer::{GesturePhase, GestureRecognizer};
pub use sink::{CollectedGestures, GestureSink, RecognizedGesture};
