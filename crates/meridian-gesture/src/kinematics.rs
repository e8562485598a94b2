//! Pure kinematic computations over contact offsets.
//!
//! Everything here is stateless; the recognizer supplies positions and
//! timestamps and interprets the results against its thresholds.

use std::time::Instant;

use crate::geometry::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (b - a).length()
}

/// Midpoint of two points.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Speed in units per second for `delta` units covered since `start`.
///
/// Zero elapsed time yields a speed of 0; callers never divide by zero and
/// an instantaneous move is deliberately reported as "not moving fast".
pub fn speed(start: Instant, delta: f32, now: Instant) -> f32 {
    let elapsed_ms = now.saturating_duration_since(start).as_secs_f32() * 1000.0;
    if elapsed_ms == 0.0 {
        0.0
    } else {
        delta / elapsed_ms * 1000.0
    }
}

/// Normalize an angle in degrees to the half-open range (-180, 180].
pub fn normalize_deg(angle: f32) -> f32 {
    let mut a = angle % 360.0;
    if a <= -180.0 {
        a += 360.0;
    } else if a > 180.0 {
        a -= 360.0;
    }
    a
}

/// Signed angle of the line from `a` to `b`, in degrees within (-180, 180].
pub fn angle_deg(a: Point, b: Point) -> f32 {
    normalize_deg((b.y - a.y).atan2(b.x - a.x).to_degrees())
}

/// Signed angle in degrees swept from the line `(base_a, base_b)` to the
/// line `(cur_a, cur_b)`.
///
/// This is what a two-finger rotation measures: the baseline endpoints are
/// the contacts' positions when the second finger landed, the current
/// endpoints are their positions now.
pub fn angle_between_lines(base_a: Point, base_b: Point, cur_a: Point, cur_b: Point) -> f32 {
    normalize_deg(angle_deg(cur_a, cur_b) - angle_deg(base_a, base_b))
}
