#[cfg(test)]
#[path = "particle_test.rs"]
mod particle_test;

use rand::Rng;

use crate::config::FieldConfig;
use crate::geom::Size;

/// Which of the two palette entries a particle is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    /// Warm accent.
    Accent,
    /// Translucent white.
    Neutral,
}

impl ParticleColor {
    /// The CSS fill string for this color under `config`.
    #[must_use]
    pub fn css(self, config: &FieldConfig) -> &str {
        match self {
            Self::Accent => &config.accent_color,
            Self::Neutral => &config.neutral_color,
        }
    }
}

/// One drifting point. Velocity, radius and color never change after spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: ParticleColor,
}

impl Particle {
    /// Spawn a particle uniformly inside `bounds`.
    ///
    /// A zero-length axis, a zero speed or a collapsed radius range yields
    /// the lower bound instead of sampling an empty range.
    pub fn random<R: Rng>(rng: &mut R, bounds: Size, config: &FieldConfig) -> Self {
        let radius = if config.radius_max > config.radius_min {
            rng.random_range(config.radius_min..config.radius_max)
        } else {
            config.radius_min
        };
        let x = if bounds.width > 0.0 { rng.random_range(0.0..bounds.width) } else { 0.0 };
        let y = if bounds.height > 0.0 { rng.random_range(0.0..bounds.height) } else { 0.0 };
        let color = if rng.random_bool(0.5) { ParticleColor::Accent } else { ParticleColor::Neutral };
        let speed = config.max_speed;
        let (vx, vy) = if speed > 0.0 {
            (rng.random_range(-speed..speed), rng.random_range(-speed..speed))
        } else {
            (0.0, 0.0)
        };
        Self { x, y, vx, vy, radius, color }
    }
}
