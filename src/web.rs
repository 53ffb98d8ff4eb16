//! Browser binding: a [`Driver`] wired to a real `<canvas>`.
//!
//! ARCHITECTURE
//! ============
//! [`ParticleSurface`] owns the driver behind `Rc<RefCell<..>>`. The four JS
//! callbacks (resize, mousemove, mouseleave, animation frame) are created once
//! at construction and live inside [`WebHost`]; each holds only a `Weak`
//! back-reference, so a dropped surface can never be reached from a stray
//! callback. Registration and removal always pass the same closure, which is
//! what lets `unmount` detach exactly what `mount` attached.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use js_sys::{Date, Function, Math};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::config::FieldConfig;
use crate::driver::{Driver, DriverState, FrameHandle, Host, Listener};
use crate::error::EngineError;
use crate::geom::{Point, Size};
use crate::render::CanvasRenderer;

type WebDriver = Driver<WebHost, SmallRng>;

/// Install the console logger and panic hook. Safe to call more than once.
///
/// `level` is a `log` level name (`"error"` .. `"trace"`); unknown or missing
/// values fall back to `info`.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: Option<String>) {
    console_error_panic_hook::set_once();
    let level = parse_level(level.as_deref());
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

fn parse_level(level: Option<&str>) -> log::Level {
    match level.map(str::parse::<log::Level>) {
        Some(Ok(level)) => level,
        _ => log::Level::Info,
    }
}

/// Convert a CSS pixel extent into a canvas buffer dimension.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn buffer_px(extent: f64) -> u32 {
    if extent.is_nan() || extent <= 0.0 {
        0
    } else if extent >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        extent.floor() as u32
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn entropy_seed() -> u64 {
    let hi = (Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) ^ lo ^ (Date::now() as u64)
}

/// Run `f` against the driver if it is still alive and not already borrowed.
fn with_driver(weak: &Weak<RefCell<WebDriver>>, f: impl FnOnce(&mut WebDriver)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut driver) = shared.try_borrow_mut() else {
        log::warn!("particle driver busy; dropping event");
        return;
    };
    f(&mut driver);
}

/// JS callbacks owned by the host. Dropped together with the driver.
struct Callbacks {
    resize: Closure<dyn FnMut()>,
    pointer_move: Closure<dyn FnMut(MouseEvent)>,
    pointer_leave: Closure<dyn FnMut()>,
    frame: Closure<dyn FnMut(f64)>,
}

impl Callbacks {
    fn new(weak: &Weak<RefCell<WebDriver>>, ctx: CanvasRenderingContext2d, last_frame_ms: Rc<Cell<f64>>) -> Self {
        let resize = {
            let weak = weak.clone();
            Closure::<dyn FnMut()>::new(move || {
                with_driver(&weak, |driver| {
                    if let Err(err) = driver.on_resize() {
                        log::error!("particle loop failed to restart after resize: {err}");
                    }
                });
            })
        };

        let pointer_move = {
            let weak = weak.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
                let client = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
                with_driver(&weak, |driver| driver.on_pointer_move(client));
            })
        };

        let pointer_leave = {
            let weak = weak.clone();
            Closure::<dyn FnMut()>::new(move || with_driver(&weak, WebDriver::on_pointer_leave))
        };

        let frame = {
            let weak = weak.clone();
            Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
                with_driver(&weak, |driver| {
                    let started_ms = Date::now();
                    let mut renderer = CanvasRenderer::new(&ctx);
                    if let Err(err) = driver.on_frame(&mut renderer) {
                        log::error!("particle loop halted: {err}");
                    }
                    last_frame_ms.set((Date::now() - started_ms).max(0.0));
                });
            })
        };

        Self { resize, pointer_move, pointer_leave, frame }
    }
}

/// [`Host`] implementation over the DOM.
pub struct WebHost {
    window: Window,
    canvas: HtmlCanvasElement,
    callbacks: Callbacks,
}

impl WebHost {
    /// Where `listener` is attached, and the callback it is attached with.
    fn binding(&self, listener: Listener) -> (&EventTarget, &Function) {
        let target: &EventTarget = match listener {
            Listener::Resize | Listener::PointerMove => self.window.as_ref(),
            Listener::PointerLeave => self.canvas.as_ref(),
        };
        let callback: &JsValue = match listener {
            Listener::Resize => self.callbacks.resize.as_ref(),
            Listener::PointerMove => self.callbacks.pointer_move.as_ref(),
            Listener::PointerLeave => self.callbacks.pointer_leave.as_ref(),
        };
        (target, callback.unchecked_ref::<Function>())
    }
}

impl Host for WebHost {
    fn container_size(&self) -> Option<Size> {
        let parent = self.canvas.parent_element()?;
        Some(Size::new(f64::from(parent.client_width()), f64::from(parent.client_height())))
    }

    fn set_surface_size(&mut self, size: Size) {
        self.canvas.set_width(buffer_px(size.width));
        self.canvas.set_height(buffer_px(size.height));
    }

    fn surface_origin(&self) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    fn add_listener(&mut self, listener: Listener) -> Result<(), EngineError> {
        let (target, callback) = self.binding(listener);
        target.add_event_listener_with_callback(listener.event_name(), callback)?;
        Ok(())
    }

    fn remove_listener(&mut self, listener: Listener) -> Result<(), EngineError> {
        let (target, callback) = self.binding(listener);
        target.remove_event_listener_with_callback(listener.event_name(), callback)?;
        Ok(())
    }

    fn request_frame(&mut self) -> Result<FrameHandle, EngineError> {
        let id = self.window.request_animation_frame(self.callbacks.frame.as_ref().unchecked_ref::<Function>())?;
        Ok(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) -> Result<(), EngineError> {
        self.window.cancel_animation_frame(handle.0)?;
        Ok(())
    }
}

/// One animated particle canvas, as seen from JavaScript.
///
/// Create one per `<canvas>`; instances share nothing. Call `mount` once the
/// canvas is in the document and `unmount` (or `free`) when it leaves.
#[wasm_bindgen]
pub struct ParticleSurface {
    driver: Rc<RefCell<WebDriver>>,
    last_frame_ms: Rc<Cell<f64>>,
}

#[wasm_bindgen]
impl ParticleSurface {
    /// Bind a new engine with the stock look to `canvas`.
    ///
    /// # Errors
    ///
    /// Fails when there is no window or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ParticleSurface, JsValue> {
        Ok(Self::build(canvas, FieldConfig::default())?)
    }

    /// Bind a new engine to `canvas`, overriding parameters from a JSON object.
    ///
    /// # Errors
    ///
    /// Fails on malformed or out-of-range config, or as [`ParticleSurface::new`].
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(canvas: HtmlCanvasElement, config_json: &str) -> Result<ParticleSurface, JsValue> {
        let config = FieldConfig::from_json(config_json)?;
        Ok(Self::build(canvas, config)?)
    }

    /// Attach listeners and start animating.
    ///
    /// # Errors
    ///
    /// Fails if already mounted, torn down, or a browser call is refused.
    pub fn mount(&self) -> Result<(), JsValue> {
        let mut driver = self.driver.try_borrow_mut().map_err(|_| busy())?;
        Ok(driver.mount()?)
    }

    /// Stop animating and detach every listener. Idempotent.
    pub fn unmount(&self) {
        match self.driver.try_borrow_mut() {
            Ok(mut driver) => driver.unmount(),
            Err(_) => log::error!("particle driver busy during unmount"),
        }
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.driver.try_borrow().map_or(0, |driver| driver.field().len())
    }

    #[wasm_bindgen(js_name = framesDrawn)]
    pub fn frames_drawn(&self) -> u64 {
        self.driver.try_borrow().map_or(0, |driver| driver.frames_drawn())
    }

    /// Wall-clock duration of the most recent frame callback.
    #[wasm_bindgen(js_name = lastFrameMs)]
    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms.get()
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.driver.try_borrow().is_ok_and(|driver| driver.state() == DriverState::Running)
    }
}

impl ParticleSurface {
    fn build(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let window = web_sys::window().ok_or_else(|| EngineError::Host("no global window".to_owned()))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::MissingContext)?;

        let last_frame_ms = Rc::new(Cell::new(0.0));
        let stats = Rc::clone(&last_frame_ms);
        let rng = SmallRng::seed_from_u64(entropy_seed());
        let driver = Rc::new_cyclic(move |weak: &Weak<RefCell<WebDriver>>| {
            let callbacks = Callbacks::new(weak, ctx, stats);
            RefCell::new(Driver::new(WebHost { window, canvas, callbacks }, rng, config))
        });

        Ok(Self { driver, last_frame_ms })
    }
}

impl Drop for ParticleSurface {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn busy() -> EngineError {
    EngineError::Host("particle driver busy".to_owned())
}
