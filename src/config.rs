//! Field parameters.
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! default config reproduces the stock look exactly. Hosts may override
//! individual values from JSON (camelCase keys); anything omitted keeps its
//! default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ACCENT_COLOR, DENSITY_DIVISOR_PX2, MAX_PARTICLES, MAX_SPEED, NEUTRAL_COLOR, POINTER_RADIUS_PX, RADIUS_MAX,
    RADIUS_MIN, REPULSION_GAIN,
};
use crate::error::EngineError;

/// Tunable parameters for one particle surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    /// Square pixels of surface per particle.
    pub density_divisor: f64,
    /// Hard cap on the particle count.
    pub max_particles: usize,
    /// Pointer interaction radius in pixels.
    pub pointer_radius: f64,
    /// Repulsion displacement at zero distance.
    pub repulsion_gain: f64,
    /// Per-axis drift bound in pixels per frame.
    pub max_speed: f64,
    /// Inclusive lower bound of the particle radius.
    pub radius_min: f64,
    /// Exclusive upper bound of the particle radius.
    pub radius_max: f64,
    /// CSS fill for accent particles.
    pub accent_color: String,
    /// CSS fill for neutral particles.
    pub neutral_color: String,
    /// Drop a frame whose draw pass fails instead of halting the loop.
    pub skip_failed_frames: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density_divisor: DENSITY_DIVISOR_PX2,
            max_particles: MAX_PARTICLES,
            pointer_radius: POINTER_RADIUS_PX,
            repulsion_gain: REPULSION_GAIN,
            max_speed: MAX_SPEED,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            accent_color: ACCENT_COLOR.to_owned(),
            neutral_color: NEUTRAL_COLOR.to_owned(),
            skip_failed_frames: false,
        }
    }
}

impl FieldConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for malformed JSON and
    /// [`EngineError::InvalidConfig`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the field.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(self.density_divisor.is_finite() && self.density_divisor > 0.0) {
            return Err(invalid("densityDivisor must be positive"));
        }
        if !(self.pointer_radius.is_finite() && self.pointer_radius > 0.0) {
            return Err(invalid("pointerRadius must be positive"));
        }
        if !(self.repulsion_gain.is_finite() && self.repulsion_gain >= 0.0) {
            return Err(invalid("repulsionGain must not be negative"));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(invalid("maxSpeed must not be negative"));
        }
        if !(self.radius_min.is_finite() && self.radius_min > 0.0) {
            return Err(invalid("radiusMin must be positive"));
        }
        if !(self.radius_max.is_finite() && self.radius_max > self.radius_min) {
            return Err(invalid("radiusMax must be greater than radiusMin"));
        }
        if self.accent_color.trim().is_empty() || self.neutral_color.trim().is_empty() {
            return Err(invalid("palette colors must not be empty"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> EngineError {
    EngineError::InvalidConfig(msg.to_owned())
}
