//! Logging facilities for Meridian Gesture.
//!
//! Meridian Gesture uses the `tracing` crate for instrumentation. To see
//! logs, install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! State-machine transitions log at `debug`, per-event detail and
//! suppressed or malformed input at `trace`. Use the constants in
//! [`targets`] with `tracing` directives to filter by subsystem, e.g.
//! `meridian_gesture::recognizer=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core plumbing target.
    pub const CORE: &str = "meridian_gesture_core";
    /// Timer system target.
    pub const TIMER: &str = "meridian_gesture_core::timer";
    /// Gesture recognizer target.
    pub const RECOGNIZER: &str = "meridian_gesture::recognizer";
    /// Mouse-wheel adapter target.
    pub const WHEEL: &str = "meridian_gesture::wheel";
    /// Trackpad adapter target.
    pub const TRACKPAD: &str = "meridian_gesture::trackpad";
    /// Finger tracking target.
    pub const FINGERS: &str = "meridian_gesture::fingers";
}
