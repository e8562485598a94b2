//! Threshold configuration and direction filters.
//!
//! Out-of-range values are never rejected: every threshold is resolved
//! through an `effective_*` accessor at the moment of use, falling back to
//! its documented default when the configured value is invalid (spilled
//! config files and zero-initialized embedders both degrade to stock
//! behavior instead of breaking recognition).

use std::time::Duration;

/// Default minimum pan displacement in distance units.
pub const DEFAULT_PAN_DISTANCE: f32 = 5.0;

/// Default minimum pinch distance delta in distance units.
pub const DEFAULT_PINCH_DISTANCE: f32 = 5.0;

/// Default minimum rotation in degrees. Valid configured values lie in
/// (0, 360].
pub const DEFAULT_ROTATE_ANGLE_DEG: f32 = 1.0;

/// Default minimum swipe speed in distance units per second.
pub const DEFAULT_SWIPE_SPEED: f32 = 100.0;

/// Default long-press duration in milliseconds.
pub const DEFAULT_LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Squared movement radius within which a held contact still long-presses.
pub const LONG_PRESS_SLOP_SQUARED: f32 = 25.0;

/// Default wheel quiescence window in milliseconds. A wheel burst ends when
/// no tick arrives for this long.
pub const DEFAULT_WHEEL_QUIESCENCE_MS: u64 = 300;

/// Pinch threshold for the trackpad path, as a scale-factor offset.
///
/// Unlike the touch path this is not user-configurable.
pub const TRACKPAD_PINCH_THRESHOLD: f32 = 0.05;

/// Which movement directions a pan or swipe filter admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionFilter {
    /// Admit nothing; the family never fires.
    None,
    /// Admit only movement whose dominant axis is horizontal.
    Horizontal,
    /// Admit only movement whose dominant axis is vertical.
    Vertical,
    /// Admit any direction.
    #[default]
    All,
}

impl DirectionFilter {
    /// Whether movement with the given dominant axis passes the filter.
    pub fn allows(self, horizontal: bool) -> bool {
        match self {
            Self::None => false,
            Self::Horizontal => horizontal,
            Self::Vertical => !horizontal,
            Self::All => true,
        }
    }
}

/// User-tunable recognition thresholds and per-family enable flags.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Whether pan recognition runs at all.
    pub enable_pan: bool,
    /// Whether pinch recognition runs at all.
    pub enable_pinch: bool,
    /// Whether rotate recognition runs at all.
    pub enable_rotate: bool,
    /// Whether swipe detection runs at all.
    pub enable_swipe: bool,

    /// Minimum displacement before a pan starts. Non-positive values fall
    /// back to [`DEFAULT_PAN_DISTANCE`].
    pub pan_distance: f32,
    /// Minimum finger-distance delta before a pinch starts. Non-positive
    /// values fall back to [`DEFAULT_PINCH_DISTANCE`].
    pub pinch_distance: f32,
    /// Minimum rotation in degrees before a rotate starts. Values outside
    /// (0, 360] fall back to [`DEFAULT_ROTATE_ANGLE_DEG`].
    pub rotate_angle_deg: f32,
    /// Minimum lift speed for a swipe. Non-positive values fall back to
    /// [`DEFAULT_SWIPE_SPEED`].
    pub swipe_speed: f32,

    /// Direction filter applied to pan movement.
    pub pan_direction: DirectionFilter,
    /// Direction filter applied to swipe classification.
    pub swipe_direction: DirectionFilter,

    /// How long a solitary contact must be held for a context menu.
    /// `Duration::ZERO` falls back to [`DEFAULT_LONG_PRESS_TIMEOUT_MS`].
    pub long_press_timeout: Duration,
    /// How long the wheel may stay quiet before the burst ends.
    /// `Duration::ZERO` falls back to [`DEFAULT_WHEEL_QUIESCENCE_MS`].
    pub wheel_quiescence: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            enable_pan: true,
            enable_pinch: true,
            enable_rotate: true,
            enable_swipe: true,
            pan_distance: DEFAULT_PAN_DISTANCE,
            pinch_distance: DEFAULT_PINCH_DISTANCE,
            rotate_angle_deg: DEFAULT_ROTATE_ANGLE_DEG,
            swipe_speed: DEFAULT_SWIPE_SPEED,
            pan_direction: DirectionFilter::All,
            swipe_direction: DirectionFilter::All,
            long_press_timeout: Duration::from_millis(DEFAULT_LONG_PRESS_TIMEOUT_MS),
            wheel_quiescence: Duration::from_millis(DEFAULT_WHEEL_QUIESCENCE_MS),
        }
    }
}

impl GestureConfig {
    /// The pan threshold actually applied.
    pub fn effective_pan_distance(&self) -> f32 {
        if self.pan_distance > 0.0 {
            self.pan_distance
        } else {
            DEFAULT_PAN_DISTANCE
        }
    }

    /// The pinch threshold actually applied.
    pub fn effective_pinch_distance(&self) -> f32 {
        if self.pinch_distance > 0.0 {
            self.pinch_distance
        } else {
            DEFAULT_PINCH_DISTANCE
        }
    }

    /// The rotate threshold actually applied, in degrees.
    pub fn effective_rotate_angle_deg(&self) -> f32 {
        if self.rotate_angle_deg > 0.0 && self.rotate_angle_deg <= 360.0 {
            self.rotate_angle_deg
        } else {
            DEFAULT_ROTATE_ANGLE_DEG
        }
    }

    /// The swipe speed threshold actually applied.
    pub fn effective_swipe_speed(&self) -> f32 {
        if self.swipe_speed > 0.0 {
            self.swipe_speed
        } else {
            DEFAULT_SWIPE_SPEED
        }
    }

    /// The long-press duration actually applied.
    pub fn effective_long_press_timeout(&self) -> Duration {
        if self.long_press_timeout > Duration::ZERO {
            self.long_press_timeout
        } else {
            Duration::from_millis(DEFAULT_LONG_PRESS_TIMEOUT_MS)
        }
    }

    /// The wheel quiescence window actually applied.
    pub fn effective_wheel_quiescence(&self) -> Duration {
        if self.wheel_quiescence > Duration::ZERO {
            self.wheel_quiescence
        } else {
            Duration::from_millis(DEFAULT_WHEEL_QUIESCENCE_MS)
        }
    }
}
