//! Segment layout and circular angle arithmetic
//!
//! All angles are degrees in the wheel's own frame. Segment `i` spans
//! `[i * segment_angle, (i + 1) * segment_angle)` and its center sits in the
//! middle of that arc.

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};

/// Degrees in a full turn
pub const FULL_TURN: f64 = 360.0;

/// Normalize any finite angle into `[0, 360)`.
///
/// The double modulo keeps negative rotations non-negative.
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % FULL_TURN) + FULL_TURN) % FULL_TURN
}

/// Largest segment count a wheel may have (0.1° segments)
pub const MAX_PRIZE_COUNT: usize = 3600;

/// Bring an angle into `[0, 360)`, leaving in-range values bit-for-bit intact.
///
/// Re-normalizing an in-range value adds and removes 360, which drops low
/// bits and can break exact ties between centers.
pub(crate) fn wrap_degrees(degrees: f64) -> f64 {
    if (0.0..FULL_TURN).contains(&degrees) {
        degrees
    } else {
        normalize_degrees(degrees)
    }
}

/// Shortest unsigned separation between two angles, in `[0, 180]`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let a = wrap_degrees(a);
    let b = wrap_degrees(b);
    (((a - b + 540.0) % FULL_TURN) - 180.0).abs()
}

/// Signed shortest rotation that carries `from` onto `to`, in `[-180, 180)`.
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let from = wrap_degrees(from);
    let to = wrap_degrees(to);
    ((to - from + 540.0) % FULL_TURN) - 180.0
}

/// Equal-width segment layout for a wheel with `prize_count` prizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentLayout {
    prize_count: usize,
    segment_angle: f64,
}

impl SegmentLayout {
    /// Create a layout; a wheel needs between 1 and [`MAX_PRIZE_COUNT`] segments.
    pub fn new(prize_count: usize) -> WheelResult<Self> {
        if prize_count == 0 {
            return Err(WheelError::invalid("prize count must be at least 1"));
        }
        if prize_count > MAX_PRIZE_COUNT {
            return Err(WheelError::invalid(format!(
                "prize count {} exceeds the maximum of {}",
                prize_count, MAX_PRIZE_COUNT
            )));
        }

        Ok(Self {
            prize_count,
            segment_angle: FULL_TURN / prize_count as f64,
        })
    }

    /// Number of segments
    pub fn prize_count(&self) -> usize {
        self.prize_count
    }

    /// Arc width of every segment
    pub fn segment_angle(&self) -> f64 {
        self.segment_angle
    }

    /// Center angle of segment `index` at zero rotation
    pub fn center(&self, index: usize) -> f64 {
        (index as f64 * self.segment_angle + self.segment_angle / 2.0) % FULL_TURN
    }

    /// All center angles, in index order
    pub fn centers(&self) -> Vec<f64> {
        (0..self.prize_count).map(|i| self.center(i)).collect()
    }

    /// Start and end angle of segment `index`
    pub fn arc(&self, index: usize) -> (f64, f64) {
        let start = index as f64 * self.segment_angle;
        (start, start + self.segment_angle)
    }

    /// Index of the center nearest to `angle`.
    ///
    /// Equal distances go to the lower index.
    pub fn nearest_center(&self, angle: f64) -> usize {
        let mut closest_index = 0;
        let mut closest_dist = f64::INFINITY;

        for i in 0..self.prize_count {
            let dist = circular_distance(self.center(i), angle);
            if dist < closest_dist {
                closest_dist = dist;
                closest_index = i;
            }
        }

        closest_index
    }
}
