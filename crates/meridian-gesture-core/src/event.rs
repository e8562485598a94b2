//! Internal event types produced by the core plumbing.

use crate::timer::TimerId;

/// Events surfaced by the core systems to whoever drives them.
///
/// The gesture recognizer feeds these back into its own handler pipeline,
/// so timer firings travel the same single-threaded path as raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A timer has fired.
    Timer {
        /// The timer that fired.
        id: TimerId,
    },
}
