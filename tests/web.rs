//! Browser tests for the DOM wiring: listener targets, container measurement
//! and teardown. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use driftfield::web::ParticleSurface;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn new_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    document.create_element("canvas").expect("create canvas").dyn_into::<HtmlCanvasElement>().expect("canvas element")
}

/// A `width` x `height` box in the page holding `canvas`.
fn container_with(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Element {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let container = document.create_element("div").expect("create div");
    set_box(&container, width, height);
    container.append_child(canvas).expect("append canvas");
    document.body().expect("body").append_child(&container).expect("append container");
    container
}

fn set_box(element: &Element, width: u32, height: u32) {
    let style = format!("width: {width}px; height: {height}px; padding: 0; border: 0;");
    element.set_attribute("style", &style).expect("set style");
}

fn fire_window_resize() {
    let window = web_sys::window().expect("window");
    let event = Event::new("resize").expect("resize event");
    window.dispatch_event(&event).expect("dispatch resize");
}

// =============================================================
// Detached canvas
// =============================================================

#[wasm_bindgen_test]
fn detached_canvas_mounts_idle_and_unmounts_twice() {
    let surface = ParticleSurface::new(new_canvas()).expect("surface");
    surface.mount().expect("mount");
    assert!(!surface.is_running());
    assert_eq!(surface.particle_count(), 0);

    surface.unmount();
    surface.unmount();
    assert!(!surface.is_running());
    assert!(surface.mount().is_err(), "a torn-down surface must not remount");
}

#[wasm_bindgen_test]
fn mounting_twice_is_rejected() {
    let surface = ParticleSurface::new(new_canvas()).expect("surface");
    surface.mount().expect("mount");
    assert!(surface.mount().is_err());
    surface.unmount();
}

// =============================================================
// Attached canvas
// =============================================================

#[wasm_bindgen_test]
fn attached_canvas_sizes_buffer_and_seeds() {
    let canvas = new_canvas();
    let container = container_with(&canvas, 600, 300);
    let surface = ParticleSurface::new(canvas.clone()).expect("surface");
    surface.mount().expect("mount");

    assert!(surface.is_running());
    assert_eq!(canvas.width(), 600);
    assert_eq!(canvas.height(), 300);
    assert_eq!(surface.particle_count(), 20);

    surface.unmount();
    container.remove();
}

#[wasm_bindgen_test]
fn window_resize_reaches_the_driver() {
    let canvas = new_canvas();
    let container = container_with(&canvas, 600, 300);
    let surface = ParticleSurface::new(canvas.clone()).expect("surface");
    surface.mount().expect("mount");

    set_box(&container, 900, 300);
    fire_window_resize();
    assert_eq!(canvas.width(), 900);
    assert_eq!(surface.particle_count(), 30);

    set_box(&container, 0, 300);
    fire_window_resize();
    assert!(!surface.is_running());
    assert_eq!(surface.particle_count(), 0);

    surface.unmount();
    set_box(&container, 450, 300);
    fire_window_resize();
    assert_eq!(canvas.width(), 0, "a torn-down surface ignores resizes");
    assert_eq!(surface.particle_count(), 0);
    container.remove();
}

#[wasm_bindgen_test]
fn config_overrides_apply_in_the_browser() {
    let canvas = new_canvas();
    let container = container_with(&canvas, 600, 300);
    let surface = ParticleSurface::with_config(canvas, r#"{"maxParticles": 5}"#).expect("surface");
    surface.mount().expect("mount");
    assert_eq!(surface.particle_count(), 5);
    surface.unmount();
    container.remove();
}
