//! Shared numeric constants for the particle engine.

// ── Density ─────────────────────────────────────────────────────

/// Surface area in square pixels that accounts for one particle.
pub const DENSITY_DIVISOR_PX2: f64 = 9000.0;

/// Upper bound on particles per surface, regardless of size.
pub const MAX_PARTICLES: usize = 150;

// ── Pointer ─────────────────────────────────────────────────────

/// Distance in pixels within which the pointer pushes particles away.
pub const POINTER_RADIUS_PX: f64 = 150.0;

/// Displacement in pixels applied at zero distance; decays linearly to 0 at the radius.
pub const REPULSION_GAIN: f64 = 5.0;

// ── Particle shape ──────────────────────────────────────────────

/// Per-axis drift speed bound in pixels per frame. Velocities are drawn from `[-MAX_SPEED, MAX_SPEED)`.
pub const MAX_SPEED: f64 = 0.5;

/// Smallest particle radius (inclusive).
pub const RADIUS_MIN: f64 = 1.0;

/// Largest particle radius (exclusive).
pub const RADIUS_MAX: f64 = 3.0;

// ── Palette ─────────────────────────────────────────────────────

/// Accent fill (warm yellow).
pub const ACCENT_COLOR: &str = "rgba(250, 204, 21, 0.9)";

/// Neutral fill (translucent white).
pub const NEUTRAL_COLOR: &str = "rgba(255, 255, 255, 0.8)";
