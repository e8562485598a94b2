//! Timer system for Meridian Gesture.
//!
//! Provides one-shot and repeating timers backed by a deadline queue. The
//! gesture recognizer relies on two properties guaranteed here: stopping a
//! timer prevents any later firing, and re-arming (stop + start) can never
//! produce a double fire for the old deadline.
//!
//! Every operation has an `_at(now)` variant taking an explicit clock so
//! deadline arithmetic can be tested without sleeping; the plain variants
//! use `Instant::now()`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, TimerError};
use crate::event::CoreEvent;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval for repeating timers.
    interval: Duration,
    /// The kind of timer.
    kind: TimerKind,
    /// Whether this timer is active.
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages the timers owned by a recognizer or application.
#[derive(Debug)]
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires `duration` after now.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.start_one_shot_at(Instant::now(), duration)
    }

    /// Start a one-shot timer measured from an explicit clock reading.
    pub fn start_one_shot_at(&mut self, now: Instant, duration: Duration) -> TimerId {
        self.insert(now + duration, duration, TimerKind::OneShot)
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs after `interval` duration.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.start_repeating_at(Instant::now(), interval)
    }

    /// Start a repeating timer measured from an explicit clock reading.
    pub fn start_repeating_at(&mut self, now: Instant, interval: Duration) -> TimerId {
        self.insert(now + interval, interval, TimerKind::Repeating)
    }

    fn insert(&mut self, next_fire: Instant, interval: Duration, kind: TimerKind) -> TimerId {
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
            active: true,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        tracing::trace!(target: "meridian_gesture_core::timer", ?id, ?kind, "timer armed");
        id
    }

    /// Stop and remove a timer.
    ///
    /// A stopped timer is guaranteed never to fire, even if its deadline has
    /// already passed. Returns an error if the ID is unknown.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if let Some(timer) = self.timers.get_mut(id) {
            timer.active = false;
            self.timers.remove(id);
            tracing::trace!(target: "meridian_gesture_core::timer", ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.time_until_next_at(Instant::now())
    }

    /// Like [`time_until_next`](Self::time_until_next) with an explicit clock.
    pub fn time_until_next_at(&mut self, now: Instant) -> Option<Duration> {
        // Drop stale entries for stopped timers from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Process all timers that should fire now.
    ///
    /// Returns the timer events to dispatch, in deadline order.
    pub fn process_expired(&mut self) -> Vec<CoreEvent> {
        self.process_expired_at(Instant::now())
    }

    /// Process all timers whose deadline is at or before `now`.
    pub fn process_expired_at(&mut self, now: Instant) -> Vec<CoreEvent> {
        let mut events = Vec::new();

        while let Some(entry) = self.queue.peek() {
            if entry.fire_time > now {
                break;
            }

            let Some(entry) = self.queue.pop() else {
                break;
            };
            let id = entry.id;

            // A stopped timer may still have a stale queue entry.
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };
            if !timer.active {
                continue;
            }
            // A restarted timer leaves its old entry behind; only the entry
            // matching the current deadline may fire.
            if timer.next_fire != entry.fire_time {
                continue;
            }

            tracing::trace!(target: "meridian_gesture_core::timer", ?id, "timer fired");
            events.push(CoreEvent::Timer { id });

            match timer.kind {
                TimerKind::OneShot => {
                    timer.active = false;
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        events
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe wrapper around [`TimerManager`].
pub struct SharedTimerManager {
    inner: Mutex<TimerManager>,
}

impl SharedTimerManager {
    /// Create a new shared timer manager.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TimerManager::new()),
        }
    }

    /// See [`TimerManager::start_one_shot`].
    pub fn start_one_shot(&self, duration: Duration) -> TimerId {
        self.inner.lock().start_one_shot(duration)
    }

    /// See [`TimerManager::start_repeating`].
    pub fn start_repeating(&self, interval: Duration) -> TimerId {
        self.inner.lock().start_repeating(interval)
    }

    /// See [`TimerManager::stop`].
    pub fn stop(&self, id: TimerId) -> Result<()> {
        self.inner.lock().stop(id)
    }

    /// See [`TimerManager::is_active`].
    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    /// See [`TimerManager::time_until_next`].
    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    /// See [`TimerManager::process_expired`].
    pub fn process_expired(&self) -> Vec<CoreEvent> {
        self.inner.lock().process_expired()
    }
}

impl Default for SharedTimerManager {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(SharedTimerManager: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn one_shot_fires_once() {
        let mut timers = TimerManager::new();
        let now = Instant::now();
        let id = timers.start_one_shot_at(now, ms(100));

        assert!(timers.process_expired_at(now + ms(99)).is_empty());

        let fired = timers.process_expired_at(now + ms(100));
        assert_eq!(fired, vec![CoreEvent::Timer { id }]);

        // One-shot timers do not fire again.
        assert!(timers.process_expired_at(now + ms(500)).is_empty());
        assert!(!timers.is_active(id));
    }

    #[test]
    fn stopped_timer_never_fires() {
        let mut timers = TimerManager::new();
        let now = Instant::now();
        let id = timers.start_one_shot_at(now, ms(50));

        timers.stop(id).unwrap();
        assert!(timers.process_expired_at(now + ms(100)).is_empty());
    }

    #[test]
    fn stop_unknown_id_is_an_error() {
        let mut timers = TimerManager::new();
        let now = Instant::now();
        let id = timers.start_one_shot_at(now, ms(10));
        timers.stop(id).unwrap();
        assert!(timers.stop(id).is_err());
    }

    #[test]
    fn restart_does_not_double_fire() {
        let mut timers = TimerManager::new();
        let now = Instant::now();

        // Arm, cancel, and re-arm: only the second deadline may fire.
        let first = timers.start_one_shot_at(now, ms(100));
        timers.stop(first).unwrap();
        let second = timers.start_one_shot_at(now + ms(50), ms(100));

        let fired = timers.process_expired_at(now + ms(200));
        assert_eq!(fired, vec![CoreEvent::Timer { id: second }]);
    }

    #[test]
    fn repeating_timer_reschedules() {
        let mut timers = TimerManager::new();
        let now = Instant::now();
        let id = timers.start_repeating_at(now, ms(10));

        let fired = timers.process_expired_at(now + ms(10));
        assert_eq!(fired, vec![CoreEvent::Timer { id }]);
        assert!(timers.is_active(id));

        let fired = timers.process_expired_at(now + ms(20));
        assert_eq!(fired, vec![CoreEvent::Timer { id }]);
    }

    #[test]
    fn time_until_next_skips_stopped_timers() {
        let mut timers = TimerManager::new();
        let now = Instant::now();
        let soon = timers.start_one_shot_at(now, ms(10));
        let _later = timers.start_one_shot_at(now, ms(100));

        timers.stop(soon).unwrap();
        assert_eq!(timers.time_until_next_at(now), Some(ms(100)));
    }

    #[test]
    fn expired_deadline_reports_zero_wait() {
        let mut timers = TimerManager::new();
        let now = Instant::now();
        timers.start_one_shot_at(now, ms(10));
        assert_eq!(timers.time_until_next_at(now + ms(50)), Some(Duration::ZERO));
    }
}
