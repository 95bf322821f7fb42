//! Wheel Outcome Resolver
//!
//! Two steps, always in this order:
//!
//! 1. [`resolve`] picks the segment that sits under the pointer for a given
//!    rotation.
//! 2. [`correction_for`] computes the small signed adjustment that makes the
//!    final resting rotation center that segment exactly under the pointer.
//!
//! Both are pure. Randomness, if any, is chosen by the caller.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DEADBAND_DEGREES, WheelConfig};
use crate::error::{WheelError, WheelResult};
use crate::layout::{FULL_TURN, SegmentLayout, normalize_degrees, wrap_degrees};

/// Snapshot of one resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Winning segment index
    pub index: usize,
    /// Segment center angles at zero rotation
    pub centers: Vec<f64>,
    /// Un-rotated angle that now sits under the pointer
    pub target_angle: f64,
    /// Rotation reduced into `[0, 360)`
    pub base_modulo: f64,
    /// Arc width of one segment
    pub segment_angle: f64,
}

impl ResolutionResult {
    /// Number of segments the result was resolved against
    pub fn prize_count(&self) -> usize {
        self.centers.len()
    }

    /// Center angle of the winning segment, `None` if `index` is out of range
    pub fn winning_center(&self) -> Option<f64> {
        self.centers.get(self.index).copied()
    }
}

fn ensure_finite(name: &str, value: f64) -> WheelResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WheelError::invalid(format!("{} must be finite, got {}", name, value)))
    }
}

/// Resolve which segment the pointer indicates after `rotation_degrees`.
///
/// Fails with `InvalidConfiguration` when `prize_count` is zero or above
/// [`MAX_PRIZE_COUNT`](crate::layout::MAX_PRIZE_COUNT), or either angle is
/// not finite.
pub fn resolve(
    rotation_degrees: f64,
    prize_count: usize,
    pointer_offset: f64,
) -> WheelResult<ResolutionResult> {
    ensure_finite("rotation", rotation_degrees)?;
    ensure_finite("pointer offset", pointer_offset)?;
    let layout = SegmentLayout::new(prize_count)?;

    let base_modulo = normalize_degrees(rotation_degrees);
    // Rotating by base_modulo carries the center at (pointer - base) onto the pointer
    let target_angle = normalize_degrees(pointer_offset - base_modulo);
    let index = layout.nearest_center(target_angle);

    debug!(
        "resolve: rotation={} base={} target={} -> index {}/{}",
        rotation_degrees, base_modulo, target_angle, index, prize_count
    );

    Ok(ResolutionResult {
        index,
        centers: layout.centers(),
        target_angle,
        base_modulo,
        segment_angle: layout.segment_angle(),
    })
}

/// Signed correction in `[-180, 180]` that lands the winner exactly under
/// the pointer, using the default 0.5° deadband.
pub fn correction_for(
    rotation_degrees: f64,
    winning_index: usize,
    centers: &[f64],
    pointer_offset: f64,
) -> WheelResult<f64> {
    correction_with_deadband(
        rotation_degrees,
        winning_index,
        centers,
        pointer_offset,
        DEFAULT_DEADBAND_DEGREES,
    )
}

/// Same as [`correction_for`] with an explicit deadband.
pub fn correction_with_deadband(
    rotation_degrees: f64,
    winning_index: usize,
    centers: &[f64],
    pointer_offset: f64,
    deadband_degrees: f64,
) -> WheelResult<f64> {
    ensure_finite("rotation", rotation_degrees)?;
    ensure_finite("pointer offset", pointer_offset)?;
    if !deadband_degrees.is_finite() || deadband_degrees < 0.0 {
        return Err(WheelError::invalid(format!(
            "deadband must be a finite non-negative angle, got {}",
            deadband_degrees
        )));
    }
    let chosen_center = *centers.get(winning_index).ok_or_else(|| {
        WheelError::invalid(format!(
            "winning index {} outside {} segments",
            winning_index,
            centers.len()
        ))
    })?;

    let center_after = (chosen_center + (rotation_degrees % FULL_TURN) + FULL_TURN) % FULL_TURN;
    let pointer = wrap_degrees(pointer_offset);
    let signed_raw = ((pointer - center_after + 540.0) % FULL_TURN) - 180.0;

    if signed_raw.abs() < deadband_degrees {
        Ok(0.0)
    } else {
        Ok(signed_raw)
    }
}

/// Resolver bound to a [`WheelConfig`]
#[derive(Debug, Clone)]
pub struct WheelResolver {
    config: WheelConfig,
}

impl WheelResolver {
    /// Create a resolver; the config is validated once here.
    pub fn new(config: WheelConfig) -> WheelResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Current config
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Resolve against the configured prize count and pointer
    pub fn resolve(&self, rotation_degrees: f64) -> WheelResult<ResolutionResult> {
        resolve(
            rotation_degrees,
            self.config.prize_count(),
            self.config.pointer_offset,
        )
    }

    /// Correction for a previous resolution of the same rotation
    pub fn correction(
        &self,
        rotation_degrees: f64,
        resolution: &ResolutionResult,
    ) -> WheelResult<f64> {
        correction_with_deadband(
            rotation_degrees,
            resolution.index,
            &resolution.centers,
            self.config.pointer_offset,
            self.config.deadband_degrees,
        )
    }
}
