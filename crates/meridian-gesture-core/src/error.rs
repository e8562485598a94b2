//! Error types for Meridian Gesture.

use thiserror::Error;

/// The main error type for Meridian Gesture operations.
///
/// Gesture recognition itself is infallible: malformed or out-of-order raw
/// input is absorbed as a logged no-op. The errors here cover the plumbing
/// around it, chiefly timer bookkeeping.
#[derive(Debug, Error)]
pub enum GestureCoreError {
    /// Timer-related error.
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),
}

/// Timer-specific errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    #[error("invalid or expired timer ID")]
    InvalidTimerId,
}

/// A specialized Result type for Meridian Gesture operations.
pub type Result<T> = std::result::Result<T, GestureCoreError>;
