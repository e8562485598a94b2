//! Native trackpad pan/zoom/rotate adapter.
//!
//! Platforms that recognize trackpad gestures natively report explicit
//! begin/update/end edges, so no quiescence timer is needed here. The
//! adapter converts those updates into the same pan/pinch/rotate/swipe
//! contract the touch path uses, with two deliberate differences: the pinch
//! threshold is a fixed scale offset rather than a configured distance, and
//! rotation keeps the platform's sign instead of the touch path's negation.

use std::time::Instant;

use tracing::{debug, trace};

use meridian_gesture_core::logging::targets;

use crate::config::TRACKPAD_PINCH_THRESHOLD;
use crate::events::{
    GestureState, PanGestureEvent, PinchGestureEvent, RotateGestureEvent, SwipeGestureEvent,
    TrackpadUpdate,
};
use crate::geometry::Point;
use crate::kinematics::{angle_deg, speed};
use crate::recognizer::{GesturePhase, GestureRecognizer};
use crate::sink::GestureSink;

/// Accumulated state of the trackpad gesture in flight.
#[derive(Debug, Default)]
pub(crate) struct TrackpadState {
    active: bool,
    start_time: Option<Instant>,
    position: Point,
    /// Sum of all pan deltas since the gesture began.
    pan_offset: Point,
    /// Accumulated rotation in degrees.
    rotation_deg: f32,
    /// Last scale offset emitted, for the End payload.
    last_scale_offset: f32,
}

impl TrackpadState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn deactivate(&mut self) {
        *self = Self::default();
    }
}

impl GestureRecognizer {
    /// A native trackpad gesture began. Arms pan, pinch, and rotate.
    pub fn trackpad_start(&mut self, position: Point, time: Instant) {
        trace!(target: targets::TRACKPAD, "trackpad gesture began");
        self.trackpad = TrackpadState {
            active: true,
            start_time: Some(time),
            position,
            pan_offset: Point::ZERO,
            rotation_deg: 0.0,
            last_scale_offset: 0.0,
        };
        self.pan_phase = GesturePhase::Start;
        self.pinch_phase = GesturePhase::Start;
        self.rotate_phase = GesturePhase::Start;
    }

    /// One step of an in-flight trackpad gesture.
    ///
    /// An update without a preceding [`trackpad_start`](Self::trackpad_start)
    /// is ignored.
    pub fn trackpad_update(&mut self, update: TrackpadUpdate, sink: &mut dyn GestureSink) {
        if !self.trackpad.active {
            trace!(target: targets::TRACKPAD, "update without active gesture ignored");
            return;
        }
        let Some(start_time) = self.trackpad.start_time else {
            return;
        };
        self.trackpad.position = update.position;
        self.trackpad.pan_offset += update.pan;
        self.trackpad.rotation_deg += update.rotation;

        if self.config.enable_pan {
            self.trackpad_pan(&update, start_time, sink);
        }
        if self.config.enable_pinch {
            self.trackpad_pinch(&update, sink);
        }
        if self.config.enable_rotate {
            self.trackpad_rotate(&update, sink);
        }
    }

    /// The native gesture ended. Emits End for every active family, then
    /// evaluates the accumulated pan as a swipe.
    pub fn trackpad_end(&mut self, position: Point, time: Instant, sink: &mut dyn GestureSink) {
        if !self.trackpad.active {
            return;
        }
        debug!(target: targets::TRACKPAD, "trackpad gesture ended");
        let offset = self.trackpad.pan_offset;
        let start_time = self.trackpad.start_time.unwrap_or(time);

        if self.pan_phase == GesturePhase::Update {
            sink.on_pan_end(PanGestureEvent {
                position,
                offset,
                velocity: Point::new(
                    speed(start_time, offset.x, time),
                    speed(start_time, offset.y, time),
                ),
                speed: speed(start_time, offset.length(), time),
                state: GestureState::Ended,
            });
        }
        if self.pinch_phase == GesturePhase::Update {
            sink.on_pinch_end(PinchGestureEvent {
                center: position,
                scale: self.trackpad.last_scale_offset,
                state: GestureState::Ended,
            });
        }
        if self.rotate_phase == GesturePhase::Update {
            sink.on_rotate_end(RotateGestureEvent {
                center: position,
                rotation: self.trackpad.rotation_deg.to_radians(),
                state: GestureState::Ended,
            });
        }

        if self.config.enable_swipe {
            let travelled = offset.length();
            let swipe_speed = speed(start_time, travelled, time);
            if swipe_speed >= self.config.effective_swipe_speed() {
                let horizontal = offset.x.abs() > offset.y.abs();
                if self.config.swipe_direction.allows(horizontal) {
                    sink.on_swipe(SwipeGestureEvent {
                        position,
                        speed: swipe_speed,
                        angle: angle_deg(Point::ZERO, offset).to_radians(),
                    });
                }
            }
        }

        self.pan_phase = GesturePhase::Unknown;
        self.pinch_phase = GesturePhase::Unknown;
        self.rotate_phase = GesturePhase::Unknown;
        self.trackpad.deactivate();
    }

    fn trackpad_pan(
        &mut self,
        update: &TrackpadUpdate,
        start_time: Instant,
        sink: &mut dyn GestureSink,
    ) {
        let offset = self.trackpad.pan_offset;
        match self.pan_phase {
            GesturePhase::Start => {
                if offset.length() < self.config.effective_pan_distance() {
                    return;
                }
                let horizontal = offset.x.abs() > offset.y.abs();
                if !self.config.pan_direction.allows(horizontal) {
                    return;
                }
                self.pan_phase = GesturePhase::Update;
                debug!(target: targets::TRACKPAD, "trackpad pan started");
                sink.on_pan_start(PanGestureEvent {
                    position: update.position,
                    offset,
                    velocity: Point::new(
                        speed(start_time, offset.x, update.time),
                        speed(start_time, offset.y, update.time),
                    ),
                    speed: speed(start_time, offset.length(), update.time),
                    state: GestureState::Started,
                });
            }
            GesturePhase::Update => {
                let horizontal = update.pan.x.abs() > update.pan.y.abs();
                if !self.config.pan_direction.allows(horizontal) {
                    return;
                }
                sink.on_pan_update(PanGestureEvent {
                    position: update.position,
                    offset: update.pan,
                    velocity: Point::new(
                        speed(start_time, offset.x, update.time),
                        speed(start_time, offset.y, update.time),
                    ),
                    speed: speed(start_time, offset.length(), update.time),
                    state: GestureState::Updated,
                });
            }
            GesturePhase::Unknown => {}
        }
    }

    fn trackpad_pinch(&mut self, update: &TrackpadUpdate, sink: &mut dyn GestureSink) {
        // Baseline is the platform's scale of 1.0; threshold is fixed here.
        let scale_offset = update.scale - 1.0;
        match self.pinch_phase {
            GesturePhase::Start => {
                if scale_offset.abs() < TRACKPAD_PINCH_THRESHOLD {
                    return;
                }
                self.pinch_phase = GesturePhase::Update;
                self.trackpad.last_scale_offset = scale_offset;
                debug!(target: targets::TRACKPAD, "trackpad pinch started");
                sink.on_pinch_start(PinchGestureEvent {
                    center: update.position,
                    scale: 1.0,
                    state: GestureState::Started,
                });
            }
            GesturePhase::Update => {
                self.trackpad.last_scale_offset = scale_offset;
                sink.on_pinch_update(PinchGestureEvent {
                    center: update.position,
                    scale: scale_offset,
                    state: GestureState::Updated,
                });
            }
            GesturePhase::Unknown => {}
        }
    }

    fn trackpad_rotate(&mut self, update: &TrackpadUpdate, sink: &mut dyn GestureSink) {
        let accumulated = self.trackpad.rotation_deg;
        // Platform sign is kept as-is on this path.
        let rotation = accumulated.to_radians();
        match self.rotate_phase {
            GesturePhase::Start => {
                if accumulated.abs() < self.config.effective_rotate_angle_deg() {
                    return;
                }
                self.rotate_phase = GesturePhase::Update;
                debug!(target: targets::TRACKPAD, "trackpad rotate started");
                sink.on_rotate_start(RotateGestureEvent {
                    center: update.position,
                    rotation,
                    state: GestureState::Started,
                });
            }
            GesturePhase::Update => {
                sink.on_rotate_update(RotateGestureEvent {
                    center: update.position,
                    rotation,
                    state: GestureState::Updated,
                });
            }
            GesturePhase::Unknown => {}
        }
    }
}
