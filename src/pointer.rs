//! Pointer state: the repulsion source for one surface.
//!
//! Written by pointer-move / pointer-leave events and read once per particle
//! per frame. Each driver owns its own instance, so two surfaces on the same
//! page never see each other's pointer.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::geom::Point;

/// Most recent pointer position in surface-local pixels, if the pointer is over the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Option<Point>,
    radius: f64,
}

impl PointerState {
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { position: None, radius }
    }

    /// Record a surface-local pointer position.
    pub fn set(&mut self, position: Point) {
        self.position = Some(position);
    }

    /// Forget the pointer (it left the surface).
    pub fn clear(&mut self) {
        self.position = None;
    }

    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Interaction radius in pixels.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }
}
