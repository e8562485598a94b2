//! The gesture disambiguation state machine.
//!
//! [`GestureRecognizer`] ingests raw pointer, wheel, and trackpad events,
//! tracks per-contact history, and drives one small state machine per
//! gesture family. Families share the raw input stream but transition
//! independently; the handler order within one event is fixed (pan, then
//! pinch, then rotate) so their exclusivity rules stay deterministic.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use meridian_gesture::{
//!     CollectedGestures, GestureConfig, GestureRecognizer, Point, PointerDownEvent,
//!     PointerMoveEvent, DeviceKind,
//! };
//!
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default());
//! let mut sink = CollectedGestures::new();
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
//!     &mut sink,
//! );
//! recognizer.pointer_move(
//!     PointerMoveEvent { id: 1, position: Point::new(10.0, 0.0), time: t0 },
//!     &mut sink,
//! );
//! assert_eq!(sink.events.len(), 1); // pan started
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use meridian_gesture_core::logging::targets;
use meridian_gesture_core::{CoreEvent, TimerId, TimerManager};

use crate::config::{GestureConfig, LONG_PRESS_SLOP_SQUARED};
use crate::events::{
    ContextMenuEvent, GestureState, PanGestureEvent, PinchGestureEvent, PointerButton,
    PointerDownEvent, PointerInput, PointerMoveEvent, PointerUpEvent, RotateGestureEvent,
    SwipeGestureEvent,
};
use crate::fingers::{ContactPoint, FingerTracker};
use crate::geometry::Point;
use crate::kinematics::{angle_between_lines, angle_deg, distance, midpoint, speed};
use crate::sink::GestureSink;
use crate::trackpad::TrackpadState;
use crate::wheel::WheelState;

/// Stored phase of one gesture family.
///
/// `End` and `Cancel` are transient emissions, never stored; after either is
/// emitted the stored phase drops back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Nothing armed for this family.
    #[default]
    Unknown,
    /// Armed: raw input is being evaluated against the threshold.
    Start,
    /// Active: the threshold was crossed and a Started event was emitted.
    Update,
}

impl GesturePhase {
    /// Whether a Cancel emission is owed if the gesture is torn down now.
    fn engaged(self) -> bool {
        matches!(self, Self::Start | Self::Update)
    }
}

/// Whether the very first contact is still a context-menu candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PressPhase {
    /// No candidate press.
    #[default]
    Unknown,
    /// A solitary contact is down and the long-press timer is armed.
    PointerDown,
    /// A context menu was already requested for this press.
    ContextMenu,
}

/// Distance and endpoint snapshot of the first two contacts, captured in a
/// single step whenever the second contact lands.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TwoFingerBaseline {
    /// Distance between the pair at capture time.
    pub(crate) distance: f32,
    /// Position of the first contact at capture time.
    pub(crate) first: Point,
    /// Position of the second contact at capture time.
    pub(crate) second: Point,
}

/// Recognizes pan, pinch, rotate, swipe, long-press, and wheel gestures
/// from raw input events.
///
/// All entry points are synchronous: they mutate internal state and invoke
/// the provided [`GestureSink`] before returning. The recognizer never
/// spawns threads; timer deadlines are held in an internal [`TimerManager`]
/// and fire when the embedder calls [`process_timers`](Self::process_timers).
#[derive(Debug)]
pub struct GestureRecognizer {
    pub(crate) config: GestureConfig,
    pub(crate) fingers: FingerTracker,
    pub(crate) timers: TimerManager,

    pub(crate) pan_phase: GesturePhase,
    pub(crate) pinch_phase: GesturePhase,
    pub(crate) rotate_phase: GesturePhase,
    press_phase: PressPhase,

    pub(crate) baseline: Option<TwoFingerBaseline>,

    long_press_timer: Option<TimerId>,
    long_press_id: u64,
    long_press_origin: Point,

    pub(crate) wheel: WheelState,
    pub(crate) trackpad: TrackpadState,
}

impl GestureRecognizer {
    /// Creates a recognizer with the given configuration.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            fingers: FingerTracker::new(),
            timers: TimerManager::new(),
            pan_phase: GesturePhase::Unknown,
            pinch_phase: GesturePhase::Unknown,
            rotate_phase: GesturePhase::Unknown,
            press_phase: PressPhase::Unknown,
            baseline: None,
            long_press_timer: None,
            long_press_id: 0,
            long_press_origin: Point::ZERO,
            wheel: WheelState::new(),
            trackpad: TrackpadState::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Current pan family phase.
    pub fn pan_phase(&self) -> GesturePhase {
        self.pan_phase
    }

    /// Current pinch family phase.
    pub fn pinch_phase(&self) -> GesturePhase {
        self.pinch_phase
    }

    /// Current rotate family phase.
    pub fn rotate_phase(&self) -> GesturePhase {
        self.rotate_phase
    }

    /// Number of contacts currently tracked.
    pub fn contact_count(&self) -> usize {
        self.fingers.count()
    }

    /// Routes any raw pointer event to the matching handler.
    pub fn pointer(&mut self, input: PointerInput, sink: &mut dyn GestureSink) {
        match input {
            PointerInput::Down(event) => self.pointer_down(event, sink),
            PointerInput::Move(event) => self.pointer_move(event, sink),
            PointerInput::Up(event) => self.pointer_up(event, sink),
        }
    }

    /// Handles a pointer going down.
    pub fn pointer_down(&mut self, event: PointerDownEvent, sink: &mut dyn GestureSink) {
        self.fingers.down(event.id, event.position, event.time);
        let count = self.fingers.count();
        trace!(
            target: targets::RECOGNIZER,
            id = event.id,
            count,
            "pointer down"
        );

        match count {
            1 => {
                self.pan_phase = GesturePhase::Start;
                self.evaluate_press(&event, sink);
            }
            2 => self.capture_baselines(),
            _ => {}
        }
    }

    /// Handles a tracked pointer moving. Moves for unknown ids are ignored.
    pub fn pointer_move(&mut self, event: PointerMoveEvent, sink: &mut dyn GestureSink) {
        let Some(previous) = self.fingers.by_id(event.id).map(|c| c.position) else {
            trace!(target: targets::RECOGNIZER, id = event.id, "move for unknown contact");
            return;
        };
        self.fingers.update(event.id, event.position);

        let Some(index) = (0..self.fingers.count())
            .find(|&i| self.fingers.get(i).is_some_and(|c| c.id == event.id))
        else {
            return;
        };

        if index == 0 {
            self.handle_pan_move(event.position - previous, event.time, sink);
        }
        if index < 2 && self.fingers.count() >= 2 {
            self.handle_pinch_move(sink);
            self.handle_rotate_move(sink);
        }
    }

    /// Handles a tracked pointer lifting. Lifts for unknown ids are ignored.
    pub fn pointer_up(&mut self, event: PointerUpEvent, sink: &mut dyn GestureSink) {
        let Some((index, contact)) = self.fingers.lift(event.id) else {
            trace!(target: targets::RECOGNIZER, id = event.id, "up for unknown contact");
            return;
        };
        trace!(
            target: targets::RECOGNIZER,
            id = event.id,
            index,
            remaining = self.fingers.count(),
            "pointer up"
        );

        if self.config.enable_swipe {
            self.evaluate_swipe(&contact, event.position, event.time, sink);
        }

        if index == 0 {
            self.finish_pan(&contact, event.position, event.time, sink);
        }

        if index < 2 {
            self.finish_two_finger(&contact, event.position, sink);
        }

        if self.fingers.count() == 0 {
            self.press_phase = PressPhase::Unknown;
        }
    }

    /// Fires any expired timers against wall-clock time.
    pub fn process_timers(&mut self, sink: &mut dyn GestureSink) {
        self.process_timers_at(Instant::now(), sink);
    }

    /// Fires any timers whose deadline is at or before `now`.
    pub fn process_timers_at(&mut self, now: Instant, sink: &mut dyn GestureSink) {
        for event in self.timers.process_expired_at(now) {
            let CoreEvent::Timer { id } = event;
            if self.long_press_timer == Some(id) {
                self.long_press_timer = None;
                self.long_press_fired(sink);
            } else if self.wheel.timer == Some(id) {
                self.wheel.timer = None;
                self.wheel_quiescence_fired(now, sink);
            }
        }
    }

    /// Time until the next pending timer deadline, given the current time.
    pub fn time_until_next_timer(&mut self, now: Instant) -> Option<Duration> {
        self.timers.time_until_next_at(now)
    }

    /// Synthesizes Cancel for the engaged family with the highest priority
    /// (pan, then pinch, then rotate; first match only) and releases both
    /// timers. Call on host teardown.
    pub fn cancel_all(&mut self, sink: &mut dyn GestureSink) {
        if self.pan_phase.engaged() {
            let position = self.fingers.get(0).map_or(Point::ZERO, |c| c.position);
            let offset = self.fingers.get(0).map_or(Point::ZERO, ContactPoint::offset);
            sink.on_pan_cancel(PanGestureEvent {
                position,
                offset,
                velocity: Point::ZERO,
                speed: 0.0,
                state: GestureState::Cancelled,
            });
        } else if self.pinch_phase.engaged() {
            sink.on_pinch_cancel(PinchGestureEvent {
                center: self.pair_midpoint(),
                scale: 1.0,
                state: GestureState::Cancelled,
            });
        } else if self.rotate_phase.engaged() {
            sink.on_rotate_cancel(RotateGestureEvent {
                center: self.pair_midpoint(),
                rotation: 0.0,
                state: GestureState::Cancelled,
            });
        }
        debug!(target: targets::RECOGNIZER, "cancelled active gestures");

        self.pan_phase = GesturePhase::Unknown;
        self.pinch_phase = GesturePhase::Unknown;
        self.rotate_phase = GesturePhase::Unknown;
        self.press_phase = PressPhase::Unknown;
        self.baseline = None;
        self.release_timers();
        self.wheel.deactivate();
        self.trackpad.deactivate();
    }

    /// Clears all state without emitting anything. Unlike
    /// [`cancel_all`](Self::cancel_all) this is silent; use it when the
    /// input source restarts and no observer cares about in-flight gestures.
    pub fn reset(&mut self) {
        self.fingers.clear();
        self.pan_phase = GesturePhase::Unknown;
        self.pinch_phase = GesturePhase::Unknown;
        self.rotate_phase = GesturePhase::Unknown;
        self.press_phase = PressPhase::Unknown;
        self.baseline = None;
        self.release_timers();
        self.wheel.deactivate();
        self.trackpad.deactivate();
    }

    fn release_timers(&mut self) {
        if let Some(id) = self.long_press_timer.take() {
            let _ = self.timers.stop(id);
        }
        if let Some(id) = self.wheel.timer.take() {
            let _ = self.timers.stop(id);
        }
    }

    /// Captures pinch and rotate baselines from the first two contacts in a
    /// single step, arming both families.
    fn capture_baselines(&mut self) {
        let Some((a, b)) = self.fingers.first_two() else {
            return;
        };
        self.baseline = Some(TwoFingerBaseline {
            distance: distance(a.position, b.position),
            first: a.position,
            second: b.position,
        });
        self.pinch_phase = GesturePhase::Start;
        self.rotate_phase = GesturePhase::Start;
        debug!(
            target: targets::RECOGNIZER,
            first = a.id,
            second = b.id,
            "captured two-finger baselines"
        );
    }

    fn pair_midpoint(&self) -> Point {
        self.fingers
            .first_two()
            .map_or(Point::ZERO, |(a, b)| midpoint(a.position, b.position))
    }

    // --- pan ---

    fn handle_pan_move(&mut self, delta: Point, now: Instant, sink: &mut dyn GestureSink) {
        if !self.config.enable_pan {
            return;
        }
        let Some(contact) = self.fingers.get(0) else {
            return;
        };
        let offset = contact.offset();
        let down_time = contact.down_time;
        let position = contact.position;

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
                debug!(target: targets::RECOGNIZER, "pan started");
                sink.on_pan_start(PanGestureEvent {
                    position,
                    offset,
                    velocity: Point::new(
                        speed(down_time, offset.x, now),
                        speed(down_time, offset.y, now),
                    ),
                    speed: speed(down_time, offset.length(), now),
                    state: GestureState::Started,
                });
            }
            GesturePhase::Update => {
                let horizontal = delta.x.abs() > delta.y.abs();
                if !self.config.pan_direction.allows(horizontal) {
                    return;
                }
                sink.on_pan_update(PanGestureEvent {
                    position,
                    offset: delta,
                    velocity: Point::new(
                        speed(down_time, offset.x, now),
                        speed(down_time, offset.y, now),
                    ),
                    speed: speed(down_time, offset.length(), now),
                    state: GestureState::Updated,
                });
            }
            GesturePhase::Unknown => {}
        }
    }

    fn finish_pan(
        &mut self,
        contact: &ContactPoint,
        position: Point,
        now: Instant,
        sink: &mut dyn GestureSink,
    ) {
        if self.pan_phase == GesturePhase::Update {
            let offset = position - contact.origin;
            debug!(target: targets::RECOGNIZER, "pan ended");
            sink.on_pan_end(PanGestureEvent {
                position,
                offset,
                velocity: Point::new(
                    speed(contact.down_time, offset.x, now),
                    speed(contact.down_time, offset.y, now),
                ),
                speed: speed(contact.down_time, offset.length(), now),
                state: GestureState::Ended,
            });
        }
        // The next-oldest contact takes over as the pan driver.
        self.pan_phase = if self.fingers.count() > 0 {
            GesturePhase::Start
        } else {
            GesturePhase::Unknown
        };
    }

    // --- pinch ---

    fn handle_pinch_move(&mut self, sink: &mut dyn GestureSink) {
        if !self.config.enable_pinch {
            return;
        }
        let Some(baseline) = self.baseline else {
            return;
        };
        let Some((a, b)) = self.fingers.first_two() else {
            return;
        };
        let delta = distance(a.position, b.position) - baseline.distance;
        let center = midpoint(a.position, b.position);

        match self.pinch_phase {
            GesturePhase::Start => {
                if delta.abs() < self.config.effective_pinch_distance() {
                    return;
                }
                self.pinch_phase = GesturePhase::Update;
                debug!(target: targets::RECOGNIZER, "pinch started");
                sink.on_pinch_start(PinchGestureEvent {
                    center,
                    scale: 1.0,
                    state: GestureState::Started,
                });
            }
            GesturePhase::Update => {
                sink.on_pinch_update(PinchGestureEvent {
                    center,
                    scale: delta,
                    state: GestureState::Updated,
                });
            }
            GesturePhase::Unknown => {}
        }
    }

    // --- rotate ---

    fn handle_rotate_move(&mut self, sink: &mut dyn GestureSink) {
        if !self.config.enable_rotate {
            return;
        }
        let Some(baseline) = self.baseline else {
            return;
        };
        let Some((a, b)) = self.fingers.first_two() else {
            return;
        };
        let swept = angle_between_lines(baseline.first, baseline.second, a.position, b.position);
        let center = midpoint(a.position, b.position);
        // The touch path negates the swept angle; the trackpad path does not.
        let rotation = -swept.to_radians();

        match self.rotate_phase {
            GesturePhase::Start => {
                if swept.abs() < self.config.effective_rotate_angle_deg() {
                    return;
                }
                self.rotate_phase = GesturePhase::Update;
                debug!(target: targets::RECOGNIZER, "rotate started");
                sink.on_rotate_start(RotateGestureEvent {
                    center,
                    rotation,
                    state: GestureState::Started,
                });
            }
            GesturePhase::Update => {
                sink.on_rotate_update(RotateGestureEvent {
                    center,
                    rotation,
                    state: GestureState::Updated,
                });
            }
            GesturePhase::Unknown => {}
        }
    }

    /// Ends pinch and rotate when a member of the tracked pair lifts, then
    /// re-arms both from the new first two contacts when enough remain.
    fn finish_two_finger(
        &mut self,
        lifted: &ContactPoint,
        final_position: Point,
        sink: &mut dyn GestureSink,
    ) {
        let partner = self.fingers.get(0).copied();

        if self.pinch_phase == GesturePhase::Update {
            let (center, scale) = match (partner, self.baseline) {
                (Some(p), Some(b)) => (
                    midpoint(p.position, final_position),
                    distance(p.position, final_position) - b.distance,
                ),
                _ => (final_position, 0.0),
            };
            debug!(target: targets::RECOGNIZER, "pinch ended");
            sink.on_pinch_end(PinchGestureEvent {
                center,
                scale,
                state: GestureState::Ended,
            });
        }

        if self.rotate_phase == GesturePhase::Update {
            let (center, rotation) = match (partner, self.baseline) {
                (Some(p), Some(b)) => {
                    // The lifted contact held pair slot 0 or 1; keep the
                    // baseline endpoints matched to the surviving order.
                    let swept = if lifted.down_time <= p.down_time {
                        angle_between_lines(b.first, b.second, final_position, p.position)
                    } else {
                        angle_between_lines(b.first, b.second, p.position, final_position)
                    };
                    (midpoint(p.position, final_position), -swept.to_radians())
                }
                _ => (final_position, 0.0),
            };
            debug!(target: targets::RECOGNIZER, "rotate ended");
            sink.on_rotate_end(RotateGestureEvent {
                center,
                rotation,
                state: GestureState::Ended,
            });
        }

        self.pinch_phase = GesturePhase::Unknown;
        self.rotate_phase = GesturePhase::Unknown;
        self.baseline = None;

        if self.fingers.count() >= 2 {
            self.capture_baselines();
        }
    }

    // --- swipe ---

    /// Evaluated once per lift; emits zero or one swipe.
    fn evaluate_swipe(
        &mut self,
        contact: &ContactPoint,
        final_position: Point,
        now: Instant,
        sink: &mut dyn GestureSink,
    ) {
        let offset = final_position - contact.origin;
        let travelled = offset.length();
        let swipe_speed = speed(contact.down_time, travelled, now);
        if swipe_speed < self.config.effective_swipe_speed() {
            return;
        }
        let horizontal = offset.x.abs() > offset.y.abs();
        if !self.config.swipe_direction.allows(horizontal) {
            return;
        }
        let angle = angle_deg(contact.origin, final_position).to_radians();
        debug!(target: targets::RECOGNIZER, speed = swipe_speed, "swipe");
        sink.on_swipe(SwipeGestureEvent {
            position: final_position,
            speed: swipe_speed,
            angle,
        });
    }

    // --- long-press / context menu ---

    fn evaluate_press(&mut self, event: &PointerDownEvent, sink: &mut dyn GestureSink) {
        match event.button {
            Some(PointerButton::Primary) | Some(PointerButton::Middle) => {
                self.press_phase = PressPhase::Unknown;
            }
            Some(PointerButton::Secondary) => {
                self.press_phase = PressPhase::ContextMenu;
                debug!(target: targets::RECOGNIZER, "context menu via secondary button");
                sink.on_context_menu(ContextMenuEvent {
                    position: event.position,
                });
            }
            None => {
                self.press_phase = PressPhase::PointerDown;
                self.long_press_id = event.id;
                self.long_press_origin = event.position;
                if let Some(id) = self.long_press_timer.take() {
                    let _ = self.timers.stop(id);
                }
                self.long_press_timer = Some(self.timers.start_one_shot_at(
                    event.time,
                    self.config.effective_long_press_timeout(),
                ));
            }
        }
    }

    /// Radius and identity checks happen here, at fire time, not on every
    /// move.
    fn long_press_fired(&mut self, sink: &mut dyn GestureSink) {
        if self.press_phase != PressPhase::PointerDown || self.fingers.count() != 1 {
            return;
        }
        let Some(contact) = self.fingers.get(0) else {
            return;
        };
        if contact.id != self.long_press_id {
            return;
        }
        if (contact.position - self.long_press_origin).length_squared() >= LONG_PRESS_SLOP_SQUARED {
            return;
        }
        self.press_phase = PressPhase::ContextMenu;
        debug!(target: targets::RECOGNIZER, "context menu via long press");
        sink.on_context_menu(ContextMenuEvent {
            position: contact.position,
        });
    }
}

static_assertions::assert_impl_all!(GestureRecognizer: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectionFilter;
    use crate::events::DeviceKind;
    use crate::sink::{CollectedGestures, RecognizedGesture};

    fn down(id: u64, x: f32, y: f32, time: Instant) -> PointerDownEvent {
        PointerDownEvent {
            id,
            position: Point::new(x, y),
            device: DeviceKind::Touch,
            button: None,
            time,
        }
    }

    fn mv(id: u64, x: f32, y: f32, time: Instant) -> PointerMoveEvent {
        PointerMoveEvent {
            id,
            position: Point::new(x, y),
            time,
        }
    }

    fn up(id: u64, x: f32, y: f32, time: Instant) -> PointerUpEvent {
        PointerUpEvent {
            id,
            position: Point::new(x, y),
            time,
        }
    }

    fn pans(sink: &CollectedGestures) -> Vec<PanGestureEvent> {
        sink.events
            .iter()
            .filter_map(|e| match e {
                RecognizedGesture::Pan(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    fn pinches(sink: &CollectedGestures) -> Vec<PinchGestureEvent> {
        sink.events
            .iter()
            .filter_map(|e| match e {
                RecognizedGesture::Pinch(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn sub_threshold_movement_never_starts_a_pan() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, 2.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, 4.0, 0.0, t0), &mut sink);
        recognizer.pointer_up(up(1, 4.0, 0.0, t0 + Duration::from_secs(1)), &mut sink);

        assert!(pans(&sink).is_empty());
    }

    #[test]
    fn pan_start_reports_accumulated_offset_and_speed() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, 10.0, 0.0, t0 + Duration::from_millis(50)), &mut sink);

        let events = pans(&sink);
        assert_eq!(events.len(), 1);
        let start = events[0];
        assert_eq!(start.state, GestureState::Started);
        assert_eq!(start.offset, Point::new(10.0, 0.0));
        assert!((start.speed - 200.0).abs() < 1.0);
        assert!((start.velocity.x - 200.0).abs() < 1.0);
        assert_eq!(start.velocity.y, 0.0);
    }

    #[test]
    fn pan_emits_one_start_then_updates_then_one_end() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();
        let step = Duration::from_millis(10);

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        for i in 1..=5 {
            recognizer.pointer_move(mv(1, 3.0 * i as f32, 0.0, t0 + step * i), &mut sink);
        }
        recognizer.pointer_up(up(1, 15.0, 0.0, t0 + step * 6), &mut sink);

        let events = pans(&sink);
        let starts = events
            .iter()
            .filter(|e| e.state == GestureState::Started)
            .count();
        let ends = events
            .iter()
            .filter(|e| e.state == GestureState::Ended)
            .count();
        assert_eq!(starts, 1);
        assert_eq!(ends, 1);
        assert_eq!(events[0].state, GestureState::Started);
        assert_eq!(events.last().unwrap().state, GestureState::Ended);
        // Updates carry the per-move delta.
        for update in events.iter().filter(|e| e.state == GestureState::Updated) {
            assert_eq!(update.offset, Point::new(3.0, 0.0));
        }
    }

    #[test]
    fn pan_direction_filter_gates_recognition() {
        let config = GestureConfig {
            pan_direction: DirectionFilter::Vertical,
            ..Default::default()
        };
        let mut recognizer = GestureRecognizer::new(config);
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        // Horizontal movement past the threshold must not start a vertical-only pan.
        recognizer.pointer_move(mv(1, 20.0, 0.0, t0 + Duration::from_millis(10)), &mut sink);
        assert!(pans(&sink).is_empty());

        // Vertical-dominant movement does.
        recognizer.pointer_move(mv(1, 20.0, 30.0, t0 + Duration::from_millis(20)), &mut sink);
        assert_eq!(pans(&sink).len(), 1);
    }

    #[test]
    fn pinch_scale_is_measured_from_the_baseline() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        // Two contacts 50 apart.
        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_down(down(2, 50.0, 0.0, t0), &mut sink);

        // Separate to 60: crosses the default threshold of 5.
        recognizer.pointer_move(mv(2, 60.0, 0.0, t0 + Duration::from_millis(10)), &mut sink);
        let events = pinches(&sink);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].state, GestureState::Started);
        assert_eq!(events[0].scale, 1.0);
        assert_eq!(events[0].center, Point::new(30.0, 0.0));

        // Separate to 70: update carries the raw distance delta.
        recognizer.pointer_move(mv(2, 70.0, 0.0, t0 + Duration::from_millis(20)), &mut sink);
        let events = pinches(&sink);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].state, GestureState::Updated);
        assert_eq!(events[1].scale, 20.0);
    }

    #[test]
    fn baselines_recompute_together_when_second_contact_lands() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        assert!(recognizer.baseline.is_none());
        assert_eq!(recognizer.pinch_phase(), GesturePhase::Unknown);
        assert_eq!(recognizer.rotate_phase(), GesturePhase::Unknown);

        recognizer.pointer_down(down(2, 30.0, 40.0, t0), &mut sink);
        let baseline = recognizer.baseline.unwrap();
        assert_eq!(baseline.distance, 50.0);
        assert_eq!(baseline.first, Point::new(0.0, 0.0));
        assert_eq!(baseline.second, Point::new(30.0, 40.0));
        assert_eq!(recognizer.pinch_phase(), GesturePhase::Start);
        assert_eq!(recognizer.rotate_phase(), GesturePhase::Start);
    }

    #[test]
    fn touch_rotation_is_negated() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_down(down(2, 10.0, 0.0, t0), &mut sink);
        // Rotate the second contact 90 degrees counter-clockwise about the first.
        recognizer.pointer_move(mv(2, 0.0, 10.0, t0 + Duration::from_millis(10)), &mut sink);

        let rotates: Vec<_> = sink
            .events
            .iter()
            .filter_map(|e| match e {
                RecognizedGesture::Rotate(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(rotates.len(), 1);
        assert_eq!(rotates[0].state, GestureState::Started);
        // +90 degrees swept, negated on the touch path.
        assert!((rotates[0].rotation + std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn lifting_a_pair_member_ends_and_rearms_with_third_contact() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_down(down(2, 50.0, 0.0, t0), &mut sink);
        recognizer.pointer_down(down(3, 0.0, 50.0, t0), &mut sink);
        recognizer.pointer_move(mv(2, 60.0, 0.0, t0 + Duration::from_millis(10)), &mut sink);
        assert_eq!(recognizer.pinch_phase(), GesturePhase::Update);

        recognizer.pointer_up(up(1, 0.0, 0.0, t0 + Duration::from_millis(20)), &mut sink);

        let events = pinches(&sink);
        assert_eq!(events.last().unwrap().state, GestureState::Ended);
        // Contacts 2 and 3 are the new pair, armed with a fresh baseline.
        assert_eq!(recognizer.pinch_phase(), GesturePhase::Start);
        let baseline = recognizer.baseline.unwrap();
        assert_eq!(baseline.first, Point::new(60.0, 0.0));
        assert_eq!(baseline.second, Point::new(0.0, 50.0));
    }

    #[test]
    fn at_most_one_swipe_per_lift() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, 100.0, 0.0, t0 + Duration::from_millis(50)), &mut sink);
        recognizer.pointer_up(up(1, 100.0, 0.0, t0 + Duration::from_millis(50)), &mut sink);

        let swipes = sink
            .events
            .iter()
            .filter(|e| matches!(e, RecognizedGesture::Swipe(_)))
            .count();
        assert_eq!(swipes, 1);
    }

    #[test]
    fn slow_lift_is_not_a_swipe() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        // 100 units over 2 seconds is 50 units/s, below the 100 default.
        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, 100.0, 0.0, t0 + Duration::from_secs(2)), &mut sink);
        recognizer.pointer_up(up(1, 100.0, 0.0, t0 + Duration::from_secs(2)), &mut sink);

        assert!(
            !sink
                .events
                .iter()
                .any(|e| matches!(e, RecognizedGesture::Swipe(_)))
        );
    }

    #[test]
    fn stationary_hold_fires_context_menu_after_timeout() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 40.0, 40.0, t0), &mut sink);
        recognizer.process_timers_at(t0 + Duration::from_millis(500), &mut sink);

        let menus: Vec<_> = sink
            .events
            .iter()
            .filter_map(|e| match e {
                RecognizedGesture::ContextMenu(m) => Some(*m),
                _ => None,
            })
            .collect();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].position, Point::new(40.0, 40.0));
    }

    #[test]
    fn early_release_fires_no_context_menu() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 40.0, 40.0, t0), &mut sink);
        recognizer.pointer_up(up(1, 40.0, 40.0, t0 + Duration::from_millis(400)), &mut sink);
        recognizer.process_timers_at(t0 + Duration::from_millis(600), &mut sink);

        assert!(
            !sink
                .events
                .iter()
                .any(|e| matches!(e, RecognizedGesture::ContextMenu(_)))
        );
    }

    #[test]
    fn drift_outside_slop_suppresses_the_context_menu() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        // Slop radius is 5 units; drift just past it.
        recognizer.pointer_move(mv(1, 5.0, 1.0, t0 + Duration::from_millis(100)), &mut sink);
        recognizer.process_timers_at(t0 + Duration::from_millis(500), &mut sink);

        assert!(
            !sink
                .events
                .iter()
                .any(|e| matches!(e, RecognizedGesture::ContextMenu(_)))
        );
    }

    #[test]
    fn secondary_button_requests_the_menu_immediately() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(
            PointerDownEvent {
                id: 1,
                position: Point::new(5.0, 5.0),
                device: DeviceKind::Mouse,
                button: Some(PointerButton::Secondary),
                time: t0,
            },
            &mut sink,
        );

        assert!(matches!(
            sink.events.as_slice(),
            [RecognizedGesture::ContextMenu(m)] if m.position == Point::new(5.0, 5.0)
        ));
    }

    #[test]
    fn primary_button_suppresses_the_long_press() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(
            PointerDownEvent {
                id: 1,
                position: Point::ZERO,
                device: DeviceKind::Mouse,
                button: Some(PointerButton::Primary),
                time: t0,
            },
            &mut sink,
        );
        recognizer.process_timers_at(t0 + Duration::from_secs(1), &mut sink);

        assert!(sink.events.is_empty());
    }

    #[test]
    fn cancel_all_emits_the_highest_priority_family_only() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        // Drive both pan and pinch into Update.
        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, 10.0, 0.0, t0 + Duration::from_millis(10)), &mut sink);
        recognizer.pointer_down(down(2, 60.0, 0.0, t0 + Duration::from_millis(20)), &mut sink);
        recognizer.pointer_move(mv(2, 80.0, 0.0, t0 + Duration::from_millis(30)), &mut sink);
        sink.drain();

        recognizer.cancel_all(&mut sink);

        let cancelled: Vec<_> = sink
            .events
            .iter()
            .filter(|e| match e {
                RecognizedGesture::Pan(p) => p.state == GestureState::Cancelled,
                RecognizedGesture::Pinch(p) => p.state == GestureState::Cancelled,
                RecognizedGesture::Rotate(r) => r.state == GestureState::Cancelled,
                _ => false,
            })
            .collect();
        assert_eq!(cancelled.len(), 1);
        assert!(matches!(cancelled[0], RecognizedGesture::Pan(_)));
        assert_eq!(recognizer.pan_phase(), GesturePhase::Unknown);
        assert_eq!(recognizer.pinch_phase(), GesturePhase::Unknown);
    }

    #[test]
    fn disabled_families_stay_silent() {
        let config = GestureConfig {
            enable_pan: false,
            enable_pinch: false,
            enable_rotate: false,
            enable_swipe: false,
            ..Default::default()
        };
        let mut recognizer = GestureRecognizer::new(config);
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_down(down(2, 50.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, -50.0, 30.0, t0 + Duration::from_millis(10)), &mut sink);
        recognizer.pointer_move(mv(2, 90.0, -30.0, t0 + Duration::from_millis(20)), &mut sink);
        recognizer.pointer_up(up(1, -50.0, 30.0, t0 + Duration::from_millis(30)), &mut sink);

        assert!(sink.events.is_empty());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_move(mv(9, 100.0, 100.0, t0), &mut sink);
        recognizer.pointer_up(up(9, 100.0, 100.0, t0), &mut sink);

        assert!(sink.events.is_empty());
        assert_eq!(recognizer.contact_count(), 0);
    }

    #[test]
    fn reset_clears_contacts_and_timers_silently() {
        let mut recognizer = GestureRecognizer::new(GestureConfig::default());
        let mut sink = CollectedGestures::new();
        let t0 = Instant::now();

        recognizer.pointer_down(down(1, 0.0, 0.0, t0), &mut sink);
        recognizer.pointer_move(mv(1, 10.0, 0.0, t0 + Duration::from_millis(10)), &mut sink);
        sink.drain();

        recognizer.reset();
        recognizer.process_timers_at(t0 + Duration::from_secs(1), &mut sink);

        assert!(sink.events.is_empty());
        assert_eq!(recognizer.contact_count(), 0);
        assert_eq!(recognizer.pan_phase(), GesturePhase::Unknown);
    }
}
