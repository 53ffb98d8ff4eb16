//! Particle field: the particle set and the per-frame physics rule.
//!
//! A frame is two passes over one contiguous `Vec<Particle>`:
//!
//! 1. [`ParticleField::update`] moves every particle: pointer repulsion, then
//!    drift, then toroidal wraparound.
//! 2. [`ParticleField::draw`] issues one filled circle per particle, in index
//!    order, against any [`Renderer`].
//!
//! The physics never fails and never touches a drawing surface, so it is
//! tested with plain values.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::config::FieldConfig;
use crate::error::EngineError;
use crate::geom::{Point, Size};
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::render::Renderer;

/// Number of particles seeded for `size`: `min(floor(area / divisor), cap)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn particle_count(size: Size, config: &FieldConfig) -> usize {
    let per_area = (size.area() / config.density_divisor).floor();
    if per_area.is_nan() || per_area <= 0.0 {
        return 0;
    }
    if per_area >= config.max_particles as f64 {
        return config.max_particles;
    }
    per_area as usize
}

/// Displacement pushing a particle at `pos` away from `pointer`.
///
/// Magnitude is `(radius - d) / radius * gain`: `gain` at the pointer,
/// falling linearly to zero at `radius`. Returns `None` outside the radius
/// and when the particle sits exactly on the pointer, where the direction
/// is undefined and repulsion is skipped for that frame.
#[must_use]
pub fn repulsion(pos: Point, pointer: Point, radius: f64, gain: f64) -> Option<Point> {
    let dx = pointer.x - pos.x;
    let dy = pointer.y - pos.y;
    let distance = dx.hypot(dy);
    if distance >= radius || distance <= 0.0 {
        return None;
    }
    let force = (radius - distance) / radius * gain;
    Some(Point::new(-dx / distance * force, -dy / distance * force))
}

/// Wrap one coordinate into `[0, extent)`.
///
/// Leaving through the low edge snaps to the largest value below `extent`;
/// reaching or passing `extent` snaps to 0. This is a boundary snap, not a
/// modulo: overshoot is discarded.
#[must_use]
pub fn wrap(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        below(extent)
    } else if value >= extent {
        0.0
    } else {
        value
    }
}

/// The largest `f64` strictly less than `extent` (0 for non-positive extents).
fn below(extent: f64) -> f64 {
    if extent > 0.0 && extent.is_finite() { f64::from_bits(extent.to_bits() - 1) } else { 0.0 }
}

/// The particle set of one surface.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    #[must_use]
    pub fn new(config: FieldConfig) -> Self {
        Self { particles: Vec::new(), config }
    }

    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Discard every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Discard the current set and spawn a fresh one sized for `size`.
    pub fn seed<R: Rng>(&mut self, size: Size, rng: &mut R) {
        self.particles.clear();
        let count = particle_count(size, &self.config);
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, size, &self.config));
        }
        log::trace!("seeded {count} particles for {}x{}", size.width, size.height);
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self, pointer: &PointerState, size: Size) {
        let gain = self.config.repulsion_gain;
        for p in &mut self.particles {
            if let Some(source) = pointer.position() {
                if let Some(push) = repulsion(Point::new(p.x, p.y), source, pointer.radius(), gain) {
                    p.x += push.x;
                    p.y += push.y;
                }
            }
            p.x = wrap(p.x + p.vx, size.width);
            p.y = wrap(p.y + p.vy, size.height);
        }
    }

    /// Draw every particle at its current position.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `renderer`; later particles are not drawn.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), EngineError> {
        for p in &self.particles {
            renderer.fill_circle(Point::new(p.x, p.y), p.radius, p.color.css(&self.config))?;
        }
        Ok(())
    }
}
