//! Engine driver: binds one [`ParticleField`] to one drawing surface.
//!
//! The driver is a small state machine over [`DriverState`]. Everything that
//! needs a browser (measuring the container, registering listeners, pacing
//! frames) goes through the [`Host`] trait, so the whole lifecycle is tested
//! against a mock host. [`crate::web`] provides the real one.
//!
//! ```text
//! Unmounted --mount--> Idle --non-zero size--> Running
//!                       ^                         |
//!                       +------ zero size --------+
//! any state --unmount--> TornDown
//! ```
//!
//! At most one frame is outstanding at a time. Its handle lives in
//! `pending_frame` until it fires (cleared at the top of [`Driver::on_frame`])
//! or is cancelled by a zero-size resize or [`Driver::unmount`].

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use rand::Rng;

use crate::config::FieldConfig;
use crate::error::EngineError;
use crate::field::ParticleField;
use crate::geom::{Point, Size};
use crate::pointer::PointerState;
use crate::render::Renderer;

/// Event sources the driver subscribes to while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// Window resize.
    Resize,
    /// Pointer movement anywhere in the window.
    PointerMove,
    /// Pointer leaving the surface itself.
    PointerLeave,
}

impl Listener {
    /// Every listener a mounted driver holds, in registration order.
    pub const ALL: [Listener; 3] = [Self::Resize, Self::PointerMove, Self::PointerLeave];

    /// DOM event name.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::PointerMove => "mousemove",
            Self::PointerLeave => "mouseleave",
        }
    }
}

/// Opaque id of a scheduled frame, as returned by the host's frame primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Lifecycle state of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Created, not yet mounted.
    #[default]
    Unmounted,
    /// Mounted with listeners attached, but nothing to draw.
    Idle,
    /// Mounted and animating.
    Running,
    /// Unmounted for good.
    TornDown,
}

impl DriverState {
    /// Whether listeners are attached.
    #[must_use]
    pub fn is_mounted(self) -> bool {
        matches!(self, Self::Idle | Self::Running)
    }
}

/// Everything the driver needs from the surrounding runtime.
pub trait Host {
    /// Current box size of the surface's container, or `None` when there is no container.
    fn container_size(&self) -> Option<Size>;

    /// Resize the surface's pixel buffer.
    fn set_surface_size(&mut self, size: Size);

    /// Client-space position of the surface's top-left corner.
    fn surface_origin(&self) -> Point;

    /// Attach one event listener.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the runtime refuses the registration.
    fn add_listener(&mut self, listener: Listener) -> Result<(), EngineError>;

    /// Detach a listener previously attached with [`Host::add_listener`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the runtime refuses the removal.
    fn remove_listener(&mut self, listener: Listener) -> Result<(), EngineError>;

    /// Ask for [`Driver::on_frame`] to be called on the next display refresh.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the frame could not be scheduled.
    fn request_frame(&mut self) -> Result<FrameHandle, EngineError>;

    /// Cancel a frame scheduled with [`Host::request_frame`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the runtime refuses the cancellation.
    fn cancel_frame(&mut self, handle: FrameHandle) -> Result<(), EngineError>;
}

/// Drives one particle field on one surface.
pub struct Driver<H: Host, R: Rng> {
    host: H,
    rng: R,
    field: ParticleField,
    pointer: PointerState,
    size: Size,
    state: DriverState,
    listeners: Vec<Listener>,
    pending_frame: Option<FrameHandle>,
    frames_drawn: u64,
}

impl<H: Host, R: Rng> Driver<H, R> {
    #[must_use]
    pub fn new(host: H, rng: R, config: FieldConfig) -> Self {
        let pointer = PointerState::new(config.pointer_radius);
        Self {
            host,
            rng,
            field: ParticleField::new(config),
            pointer,
            size: Size::default(),
            state: DriverState::Unmounted,
            listeners: Vec::new(),
            pending_frame: None,
            frames_drawn: 0,
        }
    }

    // --- Lifecycle ---

    /// Attach listeners, size the surface, seed and start the loop.
    ///
    /// With no container or a zero-size container the driver stays
    /// [`DriverState::Idle`] until a resize supplies a usable size.
    ///
    /// # Errors
    ///
    /// [`EngineError::AlreadyMounted`] / [`EngineError::TornDown`] when not
    /// freshly created; any host error from listener registration (already
    /// attached listeners are rolled back) or from scheduling the first frame.
    pub fn mount(&mut self) -> Result<(), EngineError> {
        match self.state {
            DriverState::Unmounted => {}
            DriverState::TornDown => return Err(EngineError::TornDown),
            DriverState::Idle | DriverState::Running => return Err(EngineError::AlreadyMounted),
        }

        for listener in Listener::ALL {
            if let Err(err) = self.host.add_listener(listener) {
                self.detach_listeners();
                return Err(err);
            }
            self.listeners.push(listener);
        }

        self.state = DriverState::Idle;
        log::debug!("particle surface mounted");
        self.refresh_size()
    }

    /// Detach listeners, cancel the pending frame and drop all particles.
    ///
    /// Safe to call in any state, any number of times.
    pub fn unmount(&mut self) {
        if self.state == DriverState::TornDown {
            return;
        }
        self.detach_listeners();
        self.cancel_pending_frame();
        self.field.clear();
        self.pointer.clear();
        self.state = DriverState::TornDown;
        log::debug!("particle surface torn down after {} frames", self.frames_drawn);
    }

    // --- Events ---

    /// The window was resized: re-measure and reseed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the loop had to be started and the first frame could not be scheduled.
    pub fn on_resize(&mut self) -> Result<(), EngineError> {
        if !self.state.is_mounted() {
            return Ok(());
        }
        self.refresh_size()
    }

    /// The pointer moved; `client` is in window coordinates.
    pub fn on_pointer_move(&mut self, client: Point) {
        if !self.state.is_mounted() {
            return;
        }
        let local = client.relative_to(self.host.surface_origin());
        self.pointer.set(local);
    }

    /// The pointer left the surface.
    pub fn on_pointer_leave(&mut self) {
        self.pointer.clear();
    }

    /// A scheduled frame fired: clear, step, draw, reschedule.
    ///
    /// # Errors
    ///
    /// A failed draw pass (unless `skip_failed_frames` is set) or a failed
    /// reschedule stops the loop and returns the error; the driver drops back
    /// to [`DriverState::Idle`] and the next usable resize restarts it.
    pub fn on_frame<Rd: Renderer + ?Sized>(&mut self, renderer: &mut Rd) -> Result<(), EngineError> {
        self.pending_frame = None;
        if self.state != DriverState::Running {
            return Ok(());
        }

        match self.draw_frame(renderer) {
            Ok(()) => self.frames_drawn += 1,
            Err(err) if self.field.config().skip_failed_frames => {
                log::warn!("dropped particle frame: {err}");
            }
            Err(err) => {
                self.state = DriverState::Idle;
                return Err(err);
            }
        }

        self.schedule_frame()
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Current surface dimensions (zero until a usable size was measured).
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Listeners currently attached to the host.
    #[must_use]
    pub fn active_listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Handle of the outstanding frame, if one is scheduled.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Frames fully drawn since mount.
    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[cfg(test)]
    pub(crate) fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // --- Internals ---

    fn draw_frame<Rd: Renderer + ?Sized>(&mut self, renderer: &mut Rd) -> Result<(), EngineError> {
        renderer.clear(self.size)?;
        self.field.update(&self.pointer, self.size);
        self.field.draw(renderer)
    }

    /// Re-measure the container and either reseed or fall back to idle.
    ///
    /// A missing container is treated like a zero-size one: particles are
    /// dropped and the loop pauses. The canvas buffer keeps its last size.
    fn refresh_size(&mut self) -> Result<(), EngineError> {
        let measured = self.host.container_size();
        if let Some(size) = measured {
            self.host.set_surface_size(size);
        }

        match measured.filter(|size| !size.is_empty()) {
            Some(size) => {
                self.size = size;
                self.field.seed(size, &mut self.rng);
                if self.state == DriverState::Idle {
                    self.state = DriverState::Running;
                    log::debug!("particle loop started at {}x{}", size.width, size.height);
                }
                if self.pending_frame.is_none() {
                    return self.schedule_frame();
                }
                Ok(())
            }
            None => {
                self.size = measured.unwrap_or_default();
                self.field.clear();
                self.cancel_pending_frame();
                if self.state == DriverState::Running {
                    log::debug!("particle loop paused: surface has no area");
                }
                self.state = DriverState::Idle;
                Ok(())
            }
        }
    }

    fn schedule_frame(&mut self) -> Result<(), EngineError> {
        match self.host.request_frame() {
            Ok(handle) => {
                self.pending_frame = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.state = DriverState::Idle;
                Err(err)
            }
        }
    }

    fn cancel_pending_frame(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            if let Err(err) = self.host.cancel_frame(handle) {
                log::warn!("failed to cancel frame {}: {err}", handle.0);
            }
        }
    }

    fn detach_listeners(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = self.host.remove_listener(listener) {
                log::warn!("failed to remove {} listener: {err}", listener.event_name());
            }
        }
    }
}
