//! Tracking of active pointer contacts.
//!
//! Contacts are kept in down order because recognition cares about which
//! contact landed first (pan follows the first contact, two-finger baselines
//! come from the first two). A `HashMap` would lose that ordering.

use std::time::Instant;

use tracing::trace;

use meridian_gesture_core::logging::targets;

use crate::geometry::Point;

/// A single active contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactPoint {
    /// Stable identity for this contact, unique among concurrent contacts.
    pub id: u64,
    /// Position where the contact went down.
    pub origin: Point,
    /// Most recently observed position.
    pub position: Point,
    /// When the contact went down.
    pub down_time: Instant,
}

impl ContactPoint {
    /// Total displacement from the down position to the current position.
    pub fn offset(&self) -> Point {
        self.position - self.origin
    }
}

/// Tracks active contacts in the order they went down.
#[derive(Debug, Default)]
pub struct FingerTracker {
    contacts: Vec<ContactPoint>,
}

impl FingerTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new contact. A duplicate id replaces the stale entry in
    /// place rather than appending, so a missed lift cannot inflate the
    /// count.
    pub fn down(&mut self, id: u64, position: Point, time: Instant) {
        let contact = ContactPoint {
            id,
            origin: position,
            position,
            down_time: time,
        };
        if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == id) {
            trace!(target: targets::FINGERS, id, "replacing stale contact");
            *existing = contact;
        } else {
            self.contacts.push(contact);
        }
    }

    /// Updates the position of a tracked contact.
    ///
    /// Returns `false` when the id is unknown, which happens when a platform
    /// reports moves for contacts it never reported down.
    pub fn update(&mut self, id: u64, position: Point) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(contact) => {
                contact.position = position;
                true
            }
            None => {
                trace!(target: targets::FINGERS, id, "move for untracked contact ignored");
                false
            }
        }
    }

    /// Removes a contact, returning its down-order index and final state.
    pub fn lift(&mut self, id: u64) -> Option<(usize, ContactPoint)> {
        let index = self.contacts.iter().position(|c| c.id == id)?;
        Some((index, self.contacts.remove(index)))
    }

    /// Number of active contacts.
    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    /// Contact at the given down-order index.
    pub fn get(&self, index: usize) -> Option<&ContactPoint> {
        self.contacts.get(index)
    }

    /// Contact with the given id.
    pub fn by_id(&self, id: u64) -> Option<&ContactPoint> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// The two earliest contacts, when at least two are active.
    pub fn first_two(&self) -> Option<(&ContactPoint, &ContactPoint)> {
        match self.contacts.as_slice() {
            [a, b, ..] => Some((a, b)),
            _ => None,
        }
    }

    /// Drops all contacts.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
