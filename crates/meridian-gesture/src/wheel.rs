//! Mouse-wheel pan/zoom adapter.
//!
//! Wheel ticks have no inherent start or end, so burst boundaries are
//! synthesized: the first tick after quiescence starts a gesture, every
//! further tick updates it and re-arms the quiescence timer, and the timer
//! firing without an intervening tick ends it. Which family a burst drives
//! depends on the modifier keys held at each tick.

use std::time::Instant;

use tracing::{debug, trace};

use meridian_gesture_core::logging::targets;
use meridian_gesture_core::TimerId;

use crate::events::{GestureState, PanGestureEvent, PinchGestureEvent, WheelTick};
use crate::geometry::Point;
use crate::keyboard::ModifierState;
use crate::kinematics::speed;
use crate::recognizer::GestureRecognizer;
use crate::sink::GestureSink;

/// Which family a wheel burst is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WheelMode {
    /// Ticks translate to pan offsets.
    Pan,
    /// Ticks translate to pinch scale (zoom modifier held).
    Zoom,
}

/// State of the burst currently in flight, if any.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActiveWheel {
    mode: WheelMode,
    /// Time of the first tick, for velocity computation.
    start_time: Instant,
    /// Cursor position at the most recent tick.
    position: Point,
    /// Sum of all tick deltas in this burst.
    accumulated: Point,
    /// Last scale value emitted in zoom mode.
    last_scale: f32,
}

/// Wheel-adapter state owned by the recognizer.
#[derive(Debug, Default)]
pub(crate) struct WheelState {
    pub(crate) active: Option<ActiveWheel>,
    /// Pending quiescence timer for the burst in flight.
    pub(crate) timer: Option<TimerId>,
}

impl WheelState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Forgets the burst without emitting. The caller is responsible for
    /// stopping the timer.
    pub(crate) fn deactivate(&mut self) {
        self.active = None;
    }
}

impl GestureRecognizer {
    /// Handles a mouse-wheel tick under the given modifier state.
    ///
    /// Holding Control turns the burst into a pinch zoom; holding Shift
    /// swaps the scroll axes before panning. More than one pressed key is
    /// ambiguous and suppresses the tick entirely.
    pub fn wheel(&mut self, tick: WheelTick, modifiers: ModifierState, sink: &mut dyn GestureSink) {
        if modifiers.pressed_keys > 1 {
            trace!(target: targets::WHEEL, "ambiguous modifiers, tick suppressed");
            return;
        }

        let mode = if modifiers.control {
            WheelMode::Zoom
        } else {
            WheelMode::Pan
        };
        let enabled = match mode {
            WheelMode::Pan => self.config.enable_pan,
            WheelMode::Zoom => self.config.enable_pinch,
        };
        if !enabled {
            return;
        }
        let delta = if mode == WheelMode::Pan && modifiers.shift {
            tick.delta.swapped()
        } else {
            tick.delta
        };

        // A modifier change mid-burst ends the old family before the new
        // one starts.
        if self
            .wheel
            .active
            .is_some_and(|active| active.mode != mode)
        {
            self.wheel_end(tick.time, sink);
        }

        if let Some(active) = self.wheel.active.as_mut() {
            active.position = tick.position;
            active.accumulated += delta;
            let accumulated = active.accumulated;
            let start_time = active.start_time;
            match mode {
                WheelMode::Zoom => {
                    active.last_scale = delta.y;
                    sink.on_pinch_update(PinchGestureEvent {
                        center: tick.position,
                        scale: delta.y,
                        state: GestureState::Updated,
                    });
                }
                WheelMode::Pan => {
                    sink.on_pan_update(PanGestureEvent {
                        position: tick.position,
                        offset: delta,
                        velocity: Point::new(
                            speed(start_time, accumulated.x, tick.time),
                            speed(start_time, accumulated.y, tick.time),
                        ),
                        speed: speed(start_time, accumulated.length(), tick.time),
                        state: GestureState::Updated,
                    });
                }
            }
        } else {
            self.wheel.active = Some(ActiveWheel {
                mode,
                start_time: tick.time,
                position: tick.position,
                accumulated: delta,
                last_scale: 1.0,
            });
            debug!(target: targets::WHEEL, ?mode, "wheel burst started");
            match mode {
                WheelMode::Zoom => sink.on_pinch_start(PinchGestureEvent {
                    center: tick.position,
                    scale: 1.0,
                    state: GestureState::Started,
                }),
                WheelMode::Pan => sink.on_pan_start(PanGestureEvent {
                    position: tick.position,
                    offset: delta,
                    velocity: Point::ZERO,
                    speed: 0.0,
                    state: GestureState::Started,
                }),
            }
        }

        // Re-arm quiescence. The old timer is stopped first so it cannot
        // fire against the refreshed burst.
        if let Some(id) = self.wheel.timer.take() {
            let _ = self.timers.stop(id);
        }
        self.wheel.timer = Some(
            self.timers
                .start_one_shot_at(tick.time, self.config.effective_wheel_quiescence()),
        );
    }

    /// Called when the quiescence timer fires with no intervening tick.
    pub(crate) fn wheel_quiescence_fired(&mut self, now: Instant, sink: &mut dyn GestureSink) {
        debug!(target: targets::WHEEL, "wheel burst ended by quiescence");
        self.wheel_end(now, sink);
    }

    fn wheel_end(&mut self, now: Instant, sink: &mut dyn GestureSink) {
        let Some(active) = self.wheel.active.take() else {
            return;
        };
        match active.mode {
            WheelMode::Zoom => sink.on_pinch_end(PinchGestureEvent {
                center: active.position,
                scale: active.last_scale,
                state: GestureState::Ended,
            }),
            WheelMode::Pan => sink.on_pan_end(PanGestureEvent {
                position: active.position,
                offset: active.accumulated,
                velocity: Point::new(
                    speed(active.start_time, active.accumulated.x, now),
                    speed(active.start_time, active.accumulated.y, now),
                ),
                speed: speed(active.start_time, active.accumulated.length(), now),
                state: GestureState::Ended,
            }),
        }
    }
}
