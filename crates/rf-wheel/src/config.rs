//! Wheel configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::prize::PrizeTable;

/// Pointer position used by the stock wheel layout (top of the wheel)
pub const DEFAULT_POINTER_OFFSET: f64 = 270.0;

/// Corrections smaller than this are dropped
pub const DEFAULT_DEADBAND_DEGREES: f64 = 0.5;

/// Whole turns added to every drawn spin
pub const DEFAULT_FULL_SPINS: u32 = 5;

/// Complete wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Angle at which the fixed pointer sits
    pub pointer_offset: f64,

    /// Corrections with magnitude below this collapse to zero
    pub deadband_degrees: f64,

    /// Whole turns added to each random spin
    pub full_spins: u32,

    /// Draw the extra rotation as a whole number of degrees
    pub whole_degree_offsets: bool,

    /// How long the driver animates to the final rotation (ms)
    pub transition_ms: u64,

    /// Delay after the transition before the result is revealed (ms)
    pub reveal_delay_ms: u64,

    /// One prize per segment
    pub prizes: PrizeTable,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            pointer_offset: DEFAULT_POINTER_OFFSET,
            deadband_degrees: DEFAULT_DEADBAND_DEGREES,
            full_spins: DEFAULT_FULL_SPINS,
            whole_degree_offsets: true,
            transition_ms: 3000,
            reveal_delay_ms: 2700,
            prizes: PrizeTable::default(),
        }
    }
}

impl WheelConfig {
    /// Builder: set pointer offset
    pub fn with_pointer_offset(mut self, degrees: f64) -> Self {
        self.pointer_offset = degrees;
        self
    }

    /// Builder: set correction deadband
    pub fn with_deadband(mut self, degrees: f64) -> Self {
        self.deadband_degrees = degrees;
        self
    }

    /// Builder: set whole turns per spin
    pub fn with_full_spins(mut self, spins: u32) -> Self {
        self.full_spins = spins;
        self
    }

    /// Builder: set prize table
    pub fn with_prizes(mut self, prizes: PrizeTable) -> Self {
        self.prizes = prizes;
        self
    }

    /// Segment count
    pub fn prize_count(&self) -> usize {
        self.prizes.len()
    }

    /// Check the values the resolver depends on
    pub fn validate(&self) -> WheelResult<()> {
        if !self.pointer_offset.is_finite() {
            return Err(WheelError::invalid(format!(
                "pointer offset must be finite, got {}",
                self.pointer_offset
            )));
        }
        if !self.deadband_degrees.is_finite() || self.deadband_degrees < 0.0 {
            return Err(WheelError::invalid(format!(
                "deadband must be a finite non-negative angle, got {}",
                self.deadband_degrees
            )));
        }
        if self.prizes.is_empty() {
            return Err(WheelError::invalid("prize table is empty"));
        }
        self.prizes.layout()?;
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> WheelResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WheelError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML config
    pub fn from_yaml(yaml: &str) -> WheelResult<Self> {
        let config: Self =
            serde_yml::from_str(yaml).map_err(|e| WheelError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, format picked by extension
    pub fn load<P: AsRef<Path>>(path: P) -> WheelResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            other => Err(WheelError::ConfigParse(format!(
                "unsupported config extension: {:?}",
                other
            ))),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> WheelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WheelError::ConfigParse(e.to_string()))
    }
}
