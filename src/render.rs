//! Rendering: the draw-call seam between the field and a 2D surface.
//!
//! [`CanvasRenderer`] is the only place that draws on a
//! [`web_sys::CanvasRenderingContext2d`]. The field and driver only ever see
//! the [`Renderer`] trait, so the physics can run against a
//! [`RecordingRenderer`] with no browser at all.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::error::EngineError;
use crate::geom::{Point, Size};

/// Immediate-mode 2D drawing target.
pub trait Renderer {
    /// Erase the whole surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying surface rejects the call.
    fn clear(&mut self, size: Size) -> Result<(), EngineError>;

    /// Fill a circle centered on `center`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying surface rejects the call.
    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str) -> Result<(), EngineError>;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Circle { x: f64, y: f64, radius: f64, fill: String },
}

/// Renderer that stores draw calls instead of producing pixels.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of circles drawn since the last reset.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. })).count()
    }

    #[cfg(test)]
    pub(crate) fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, size: Size) -> Result<(), EngineError> {
        self.commands.push(DrawCommand::Clear { width: size.width, height: size.height });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str) -> Result<(), EngineError> {
        self.commands.push(DrawCommand::Circle { x: center.x, y: center.y, radius, fill: fill.to_owned() });
        Ok(())
    }
}

/// Renderer backed by a browser canvas 2D context.
pub struct CanvasRenderer<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasRenderer<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Renderer for CanvasRenderer<'_> {
    fn clear(&mut self, size: Size) -> Result<(), EngineError> {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, fill: &str) -> Result<(), EngineError> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        Ok(())
    }
}
