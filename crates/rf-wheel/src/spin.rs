//! Spin planning — what the animation driver needs for one spin
//!
//! The resolver itself never draws random numbers. [`SpinGenerator`] is the
//! caller-side source of rotations; [`plan_spin`] turns a rotation into the
//! winner, the landing correction and the final rotation to animate to.

use log::debug;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::error::WheelResult;
use crate::layout::FULL_TURN;
use crate::prize::Prize;
use crate::resolver::{ResolutionResult, WheelResolver};

/// Everything the driver needs to animate and reveal one spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    /// Raw rotation the winner was resolved from
    pub rotation: f64,
    /// Winner and intermediates
    pub resolution: ResolutionResult,
    /// Signed landing correction
    pub correction: f64,
    /// `rotation + correction`, animated as one continuous transition
    pub final_rotation: f64,
    /// Transition duration (ms)
    pub transition_ms: u64,
    /// Delay before the result is revealed (ms)
    pub reveal_delay_ms: u64,
}

impl SpinPlan {
    /// Winning segment index
    pub fn prize_index(&self) -> usize {
        self.resolution.index
    }
}

/// Seeded source of spin rotations
pub struct SpinGenerator {
    rng: ChaCha8Rng,
}

impl SpinGenerator {
    /// Create a generator; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }

    /// Wrap an existing RNG (e.g. one stream of a batch run)
    pub fn from_rng(rng: ChaCha8Rng) -> Self {
        Self { rng }
    }

    /// Draw `full_spins * 360 + offset`, offset in `[0, 360)`
    pub fn draw_rotation(&mut self, config: &WheelConfig) -> f64 {
        draw_rotation(&mut self.rng, config.full_spins, config.whole_degree_offsets)
    }
}

/// Draw one multi-turn rotation from any RNG
pub fn draw_rotation<R: Rng>(rng: &mut R, full_spins: u32, whole_degrees: bool) -> f64 {
    let offset = if whole_degrees {
        rng.random_range(0..360u32) as f64
    } else {
        rng.random_range(0.0..FULL_TURN)
    };
    full_spins as f64 * FULL_TURN + offset
}

/// Resolve `rotation` and compute where the wheel must come to rest.
pub fn plan_spin(rotation: f64, config: &WheelConfig) -> WheelResult<SpinPlan> {
    WheelResolver::new(config.clone())?.plan(rotation)
}

impl WheelResolver {
    /// Plan a spin for a rotation chosen by the caller
    pub fn plan(&self, rotation: f64) -> WheelResult<SpinPlan> {
        let resolution = self.resolve(rotation)?;
        let correction = self.correction(rotation, &resolution)?;
        let final_rotation = rotation + correction;

        debug!(
            "spin plan: rotation={} winner={} correction={} final={}",
            rotation, resolution.index, correction, final_rotation
        );

        Ok(SpinPlan {
            rotation,
            resolution,
            correction,
            final_rotation,
            transition_ms: self.config().transition_ms,
            reveal_delay_ms: self.config().reveal_delay_ms,
        })
    }

    /// Draw a rotation and plan it
    pub fn spin(&self, generator: &mut SpinGenerator) -> WheelResult<SpinPlan> {
        let rotation = generator.draw_rotation(self.config());
        self.plan(rotation)
    }

    /// Prize the plan lands on
    pub fn prize(&self, plan: &SpinPlan) -> Option<&Prize> {
        self.config().prizes.get(plan.prize_index())
    }
}
