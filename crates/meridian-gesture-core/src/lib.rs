//! Core plumbing for Meridian Gesture.
//!
//! This crate provides the foundational pieces shared by the gesture
//! recognition library:
//!
//! - **Timers**: cancellable one-shot and repeating timers with a
//!   deadline queue, designed for single-threaded event loops
//! - **Events**: the internal event enum delivered when a timer fires
//! - **Errors**: the crate-wide error taxonomy
//! - **Logging**: `tracing` target names for per-subsystem filtering
//!
//! # Timer Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use meridian_gesture_core::{CoreEvent, TimerManager};
//!
//! let mut timers = TimerManager::new();
//! let now = Instant::now();
//!
//! let id = timers.start_one_shot_at(now, Duration::from_millis(300));
//! assert!(timers.is_active(id));
//!
//! // Nothing has expired yet.
//! assert!(timers.process_expired_at(now).is_empty());
//!
//! // Move the clock past the deadline.
//! let fired = timers.process_expired_at(now + Duration::from_millis(301));
//! assert!(matches!(fired.as_slice(), [CoreEvent::Timer { id: fired_id }] if *fired_id == id));
//! ```

mod error;
mod event;
pub mod logging;
mod timer;

pub use error::{GestureCoreError, Result, TimerError};
pub use event::CoreEvent;
pub use timer::{SharedTimerManager, TimerId, TimerKind, TimerManager};
